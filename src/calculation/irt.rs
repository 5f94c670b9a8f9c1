//! Progressive IRT resolution.
//!
//! This module resolves a taxable base against the configured progressive
//! bracket table: a fixed allowance per declared dependent is subtracted
//! first, the adjusted base selects a bracket, and the tax is the bracket
//! rate applied to the whole adjusted base minus the bracket's flat
//! deduction (parcela a abater), clamped at zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::IrtTable;
use crate::error::{EngineError, EngineResult};
use crate::money::round_half_up;

/// The bracket-resolution detail behind one IRT figure.
///
/// Useful for payslip transparency: it shows which rate and deduction were
/// applied and what the base looked like after the dependent allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrtAssessment {
    /// The taxable base before the dependent allowance.
    pub taxable_base: Decimal,
    /// Total allowance subtracted for declared dependents.
    pub dependent_allowance: Decimal,
    /// The base matched against the bracket table (floored at zero).
    pub adjusted_base: Decimal,
    /// Marginal rate of the selected bracket.
    pub rate: Decimal,
    /// Flat deduction of the selected bracket.
    pub deduction: Decimal,
    /// The tax owed, rounded to the cent.
    pub tax: Decimal,
}

/// Computes the IRT owed on a taxable base.
///
/// # Arguments
///
/// * `taxable_base` - Taxable earnings for the period (must be non-negative)
/// * `dependents` - Number of declared dependents
/// * `table` - The IRT table in force
///
/// # Returns
///
/// The tax owed, rounded to the cent, or [`EngineError::NegativeAmount`]
/// when the taxable base is negative.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_irt;
/// use payroll_engine::config::{IrtTable, TaxBracket};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = IrtTable::new(
///     Decimal::from(15000),
///     vec![
///         TaxBracket {
///             lower_bound: Decimal::ZERO,
///             upper_bound: Some(Decimal::from(70000)),
///             rate: Decimal::ZERO,
///             deduction: Decimal::ZERO,
///         },
///         TaxBracket {
///             lower_bound: Decimal::from(70000),
///             upper_bound: None,
///             rate: Decimal::from_str("0.10").unwrap(),
///             deduction: Decimal::from(7000),
///         },
///     ],
/// )
/// .unwrap();
///
/// let tax = calculate_irt(Decimal::from(100000), 0, &table).unwrap();
/// assert_eq!(tax, Decimal::from(3000));
/// ```
pub fn calculate_irt(
    taxable_base: Decimal,
    dependents: u32,
    table: &IrtTable,
) -> EngineResult<Decimal> {
    Ok(calculate_irt_assessment(taxable_base, dependents, table)?.tax)
}

/// Computes the IRT owed on a taxable base, with full bracket detail.
///
/// Same computation as [`calculate_irt`], returning the selected bracket's
/// rate and deduction alongside the tax.
pub fn calculate_irt_assessment(
    taxable_base: Decimal,
    dependents: u32,
    table: &IrtTable,
) -> EngineResult<IrtAssessment> {
    if taxable_base < Decimal::ZERO {
        return Err(EngineError::NegativeAmount {
            field: "taxable_base".to_string(),
            value: taxable_base,
        });
    }

    let dependent_allowance = table.dependent_deduction() * Decimal::from(dependents);
    let adjusted_base = (taxable_base - dependent_allowance).max(Decimal::ZERO);

    let bracket = table.bracket_for(adjusted_base)?;

    // Rate times the whole adjusted base, minus the flat deduction. The
    // clamp covers the exempt bracket and any base low enough in its
    // bracket for the deduction to win.
    let tax = (adjusted_base * bracket.rate - bracket.deduction).max(Decimal::ZERO);

    Ok(IrtAssessment {
        taxable_base,
        dependent_allowance,
        adjusted_base,
        rate: bracket.rate,
        deduction: bracket.deduction,
        tax: round_half_up(tax),
    })
}
