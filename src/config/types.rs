//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, and the validated
//! aggregates built from them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the tax and labour regime.
///
/// Contains identifying information about the regime, including the
/// jurisdiction, currency, governing statute, and source URL.
#[derive(Debug, Clone, Deserialize)]
pub struct RegimeMetadata {
    /// ISO 3166-1 alpha-2 country code (e.g., "AO").
    pub country: String,
    /// ISO 4217 currency code for every monetary constant (e.g., "AOA").
    pub currency: String,
    /// The human-readable name of the regime.
    pub name: String,
    /// The statute or decree the shipped tables transcribe.
    pub statute: String,
    /// URL to the official publication.
    pub source_url: String,
}

/// A single bracket of the progressive IRT table.
///
/// Brackets are half-open intervals `[lower_bound, upper_bound)`: a value
/// exactly on a boundary belongs to the higher bracket. The top bracket has
/// no upper bound.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound of the bracket.
    pub lower_bound: Decimal,
    /// Exclusive upper bound, or `None` for the open-ended top bracket.
    #[serde(default)]
    pub upper_bound: Option<Decimal>,
    /// Marginal rate applied to the whole adjusted base, as a fraction.
    pub rate: Decimal,
    /// Flat amount subtracted from the rate product (parcela a abater).
    pub deduction: Decimal,
}

/// The validated IRT table: per-dependent deduction plus the bracket list.
///
/// Construction sorts the brackets ascending and rejects any table that is
/// not a contiguous partition of `[0, ∞)` with a single open-ended top
/// bracket, so lookups never see malformed coverage.
#[derive(Debug, Clone)]
pub struct IrtTable {
    /// Fixed deduction per declared dependent, applied before bracket lookup.
    dependent_deduction: Decimal,
    /// Brackets sorted ascending by lower bound.
    brackets: Vec<TaxBracket>,
}

impl IrtTable {
    /// Creates a validated IRT table.
    ///
    /// Brackets are sorted ascending by lower bound before validation, so
    /// callers may supply them in any order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBracketTable`] when the table is empty,
    /// does not start at zero, contains a gap or overlap, has a negative
    /// rate or deduction, or does not end in exactly one open-ended bracket.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::{IrtTable, TaxBracket};
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let brackets = vec![
    ///     TaxBracket {
    ///         lower_bound: Decimal::ZERO,
    ///         upper_bound: Some(Decimal::from(70000)),
    ///         rate: Decimal::ZERO,
    ///         deduction: Decimal::ZERO,
    ///     },
    ///     TaxBracket {
    ///         lower_bound: Decimal::from(70000),
    ///         upper_bound: None,
    ///         rate: Decimal::from_str("0.10").unwrap(),
    ///         deduction: Decimal::from(7000),
    ///     },
    /// ];
    /// let table = IrtTable::new(Decimal::from(15000), brackets).unwrap();
    /// assert_eq!(table.brackets().len(), 2);
    /// ```
    pub fn new(dependent_deduction: Decimal, brackets: Vec<TaxBracket>) -> EngineResult<Self> {
        let mut brackets = brackets;
        brackets.sort_by(|a, b| a.lower_bound.cmp(&b.lower_bound));

        let table = Self {
            dependent_deduction,
            brackets,
        };
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> EngineResult<()> {
        if self.brackets.is_empty() {
            return Err(EngineError::InvalidBracketTable {
                message: "table has no brackets".to_string(),
            });
        }

        if self.dependent_deduction < Decimal::ZERO {
            return Err(EngineError::InvalidBracketTable {
                message: format!(
                    "dependent deduction {} is negative",
                    self.dependent_deduction
                ),
            });
        }

        if self.brackets[0].lower_bound != Decimal::ZERO {
            return Err(EngineError::InvalidBracketTable {
                message: format!(
                    "first bracket must start at 0, found {}",
                    self.brackets[0].lower_bound
                ),
            });
        }

        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.deduction < Decimal::ZERO {
                return Err(EngineError::InvalidBracketTable {
                    message: format!(
                        "bracket starting at {} has a negative rate or deduction",
                        bracket.lower_bound
                    ),
                });
            }

            let is_top = index == self.brackets.len() - 1;
            match bracket.upper_bound {
                None if !is_top => {
                    return Err(EngineError::InvalidBracketTable {
                        message: format!(
                            "open-ended bracket starting at {} must be the top bracket",
                            bracket.lower_bound
                        ),
                    });
                }
                Some(upper) if is_top => {
                    return Err(EngineError::InvalidBracketTable {
                        message: format!(
                            "top bracket starting at {} must be open-ended, found upper bound {}",
                            bracket.lower_bound, upper
                        ),
                    });
                }
                Some(upper) if upper <= bracket.lower_bound => {
                    return Err(EngineError::InvalidBracketTable {
                        message: format!(
                            "bracket starting at {} has upper bound {} at or below its lower bound",
                            bracket.lower_bound, upper
                        ),
                    });
                }
                _ => {}
            }

            if !is_top {
                let next_lower = self.brackets[index + 1].lower_bound;
                if let Some(upper) = bracket.upper_bound {
                    if next_lower != upper {
                        return Err(EngineError::InvalidBracketTable {
                            message: format!(
                                "gap or overlap between upper bound {} and next lower bound {}",
                                upper, next_lower
                            ),
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Returns the fixed deduction per declared dependent.
    pub fn dependent_deduction(&self) -> Decimal {
        self.dependent_deduction
    }

    /// Returns the brackets, sorted ascending by lower bound.
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Resolves the bracket containing the given adjusted base.
    ///
    /// The scan picks the first bracket whose upper bound is absent or
    /// strictly greater than the amount, so a value exactly on a boundary
    /// resolves to the higher bracket.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBracketTable`] if no bracket covers the
    /// amount. A validated table covers every non-negative value, so this
    /// only fires for negative amounts, which callers reject before lookup.
    pub fn bracket_for(&self, amount: Decimal) -> EngineResult<&TaxBracket> {
        if amount < Decimal::ZERO {
            return Err(EngineError::InvalidBracketTable {
                message: format!("no bracket covers negative amount {}", amount),
            });
        }

        self.brackets
            .iter()
            .find(|bracket| bracket.upper_bound.is_none_or(|upper| amount < upper))
            .ok_or_else(|| EngineError::InvalidBracketTable {
                message: format!("no bracket covers amount {}", amount),
            })
    }
}

/// INSS contribution rates and the contribution base ceiling.
#[derive(Debug, Clone, Deserialize)]
pub struct InssRates {
    /// Default worker contribution rate, as a percentage (e.g., 3).
    pub worker_rate_percent: Decimal,
    /// Employer contribution rate, as a percentage (e.g., 8).
    pub employer_rate_percent: Decimal,
    /// Maximum contribution base; gross pay above this is not contributory.
    pub ceiling: Decimal,
}

/// Overtime surcharge percentages by kind of hour.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeRates {
    /// Surcharge for daytime weekday overtime, as a percentage (e.g., 50).
    pub day_surcharge_percent: Decimal,
    /// Surcharge for night overtime, as a percentage (e.g., 75).
    pub night_surcharge_percent: Decimal,
    /// Surcharge for rest-day and holiday overtime, as a percentage (e.g., 100).
    pub rest_day_surcharge_percent: Decimal,
}

/// Termination settlement rules.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminationRules {
    /// Maximum number of base salaries payable as severance indemnity.
    pub indemnity_cap_years: u32,
}

/// IRT section of a tax table file.
#[derive(Debug, Clone, Deserialize)]
pub struct IrtSection {
    /// Fixed deduction per declared dependent.
    pub dependent_deduction: Decimal,
    /// The bracket list as published.
    pub brackets: Vec<TaxBracket>,
}

/// On-disk structure of a `tables/<date>.yaml` file.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTableFile {
    /// The date this table version takes effect.
    pub effective_date: NaiveDate,
    /// IRT table section.
    pub irt: IrtSection,
    /// INSS rates section.
    pub inss: InssRates,
    /// Overtime surcharge section.
    pub overtime: OvertimeRates,
    /// Termination rules section.
    pub termination: TerminationRules,
}

/// A validated tax table version: everything in force from its effective date.
#[derive(Debug, Clone)]
pub struct TaxTableConfig {
    /// The date this table version takes effect.
    effective_date: NaiveDate,
    /// Validated IRT table.
    irt: IrtTable,
    /// INSS rates.
    inss: InssRates,
    /// Overtime surcharges.
    overtime: OvertimeRates,
    /// Termination rules.
    termination: TerminationRules,
}

impl TaxTableConfig {
    /// Creates a table version from its component parts.
    pub fn new(
        effective_date: NaiveDate,
        irt: IrtTable,
        inss: InssRates,
        overtime: OvertimeRates,
        termination: TerminationRules,
    ) -> Self {
        Self {
            effective_date,
            irt,
            inss,
            overtime,
            termination,
        }
    }

    /// Returns the date this table version takes effect.
    pub fn effective_date(&self) -> NaiveDate {
        self.effective_date
    }

    /// Returns the validated IRT table.
    pub fn irt(&self) -> &IrtTable {
        &self.irt
    }

    /// Returns the INSS rates.
    pub fn inss(&self) -> &InssRates {
        &self.inss
    }

    /// Returns the overtime surcharges.
    pub fn overtime(&self) -> &OvertimeRates {
        &self.overtime
    }

    /// Returns the termination rules.
    pub fn termination(&self) -> &TerminationRules {
        &self.termination
    }
}

/// The complete regime configuration loaded from YAML files.
///
/// This struct aggregates the regime metadata and every tax table version
/// found in a configuration directory.
#[derive(Debug, Clone)]
pub struct RegimeConfig {
    /// Regime metadata.
    metadata: RegimeMetadata,
    /// Table versions by effective date (sorted oldest first).
    tables: Vec<TaxTableConfig>,
}

impl RegimeConfig {
    /// Creates a new RegimeConfig from its component parts.
    pub fn new(metadata: RegimeMetadata, tables: Vec<TaxTableConfig>) -> Self {
        let mut sorted_tables = tables;
        sorted_tables.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            tables: sorted_tables,
        }
    }

    /// Returns the regime metadata.
    pub fn regime(&self) -> &RegimeMetadata {
        &self.metadata
    }

    /// Returns all table versions, sorted oldest first.
    pub fn tables(&self) -> &[TaxTableConfig] {
        &self.tables
    }

    /// Resolves the table version in force on the given date.
    ///
    /// The most recent version with an effective date on or before the date
    /// applies.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TableNotFound`] when every version takes
    /// effect after the given date.
    pub fn table_for(&self, date: NaiveDate) -> EngineResult<&TaxTableConfig> {
        self.tables
            .iter()
            .rev()
            .find(|table| table.effective_date <= date)
            .ok_or(EngineError::TableNotFound { date })
    }
}
