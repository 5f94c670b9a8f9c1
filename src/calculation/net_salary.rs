//! Net salary composition.
//!
//! This module composes the leaf calculations into a full monthly
//! breakdown: taxable gross earnings, IRT, the INSS split, voluntary
//! deductions, subsidies, net pay, and total employer cost.

use rust_decimal::Decimal;

use crate::config::TaxTableConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{PayslipInput, SalaryBreakdown};

use super::inss::calculate_inss;
use super::irt::calculate_irt;

/// Computes the full salary breakdown for one pay period.
///
/// Base salary, overtime, bonus, and other earnings form the taxable
/// gross. Food and transport subsidies stay outside the taxable base and
/// the INSS base; they are added back when computing net pay and employer
/// cost.
///
/// # Arguments
///
/// * `input` - Earnings, subsidies, and deductions for the period
/// * `table` - The tax table in force on the pay date
///
/// # Returns
///
/// The complete [`SalaryBreakdown`], or [`EngineError::NegativeAmount`]
/// naming the first negative monetary input.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::calculation::calculate_net_salary;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::PayslipInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/angola")?;
/// let table = loader.table_for(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())?;
///
/// let input = PayslipInput {
///     base_salary: Decimal::from(200000),
///     ..Default::default()
/// };
/// let breakdown = calculate_net_salary(&input, table)?;
/// println!("Net salary: {}", breakdown.net_salary);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn calculate_net_salary(
    input: &PayslipInput,
    table: &TaxTableConfig,
) -> EngineResult<SalaryBreakdown> {
    let monetary_inputs = [
        ("base_salary", input.base_salary),
        ("overtime", input.overtime),
        ("bonus", input.bonus),
        ("food_subsidy", input.food_subsidy),
        ("transport_subsidy", input.transport_subsidy),
        ("other_earnings", input.other_earnings),
        ("loan_deductions", input.loan_deductions),
        ("other_deductions", input.other_deductions),
    ];
    for (field, value) in monetary_inputs {
        if value < Decimal::ZERO {
            return Err(EngineError::NegativeAmount {
                field: field.to_string(),
                value,
            });
        }
    }

    // Subsidies stay outside the taxable base.
    let total_gross_earnings =
        input.base_salary + input.overtime + input.bonus + input.other_earnings;
    let taxable_base = total_gross_earnings;

    let irt = calculate_irt(taxable_base, input.dependents, table.irt())?;
    let inss = calculate_inss(
        total_gross_earnings,
        table.inss().worker_rate_percent,
        table.inss(),
    )?;

    let total_deductions = irt + inss.worker + input.loan_deductions + input.other_deductions;
    let net_salary =
        total_gross_earnings + input.food_subsidy + input.transport_subsidy - total_deductions;
    let total_employer_cost =
        total_gross_earnings + input.food_subsidy + input.transport_subsidy + inss.employer;

    Ok(SalaryBreakdown {
        base_salary: input.base_salary,
        total_gross_earnings,
        food_subsidy: input.food_subsidy,
        transport_subsidy: input.transport_subsidy,
        taxable_base,
        irt,
        inss_worker: inss.worker,
        inss_employer: inss.employer,
        total_deductions,
        net_salary,
        total_employer_cost,
        dependents: input.dependents,
    })
}
