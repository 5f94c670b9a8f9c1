//! Salary adjustment simulation models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SalaryBreakdown;

/// Inputs for a salary adjustment simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentInput {
    /// Base salary before the adjustment.
    pub current_salary: Decimal,
    /// Adjustment percentage; positive for raises, negative for cuts.
    pub adjustment_percent: Decimal,
    /// Declared dependents used in both assessments.
    #[serde(default)]
    pub dependents: u32,
    /// Number of employees the adjustment applies to.
    pub headcount: u32,
}

/// Before/after impact of a salary adjustment.
///
/// Carries the full breakdown at both salary levels plus the employer-cost
/// delta scaled by headcount, so a raise can be priced before it is
/// granted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentImpact {
    /// Base salary before the adjustment.
    pub current_salary: Decimal,
    /// Base salary after the adjustment, rounded to the cent.
    pub adjusted_salary: Decimal,
    /// The applied adjustment percentage.
    pub adjustment_percent: Decimal,
    /// Number of employees the impact is scaled by.
    pub headcount: u32,
    /// Full breakdown at the current salary.
    pub current: SalaryBreakdown,
    /// Full breakdown at the adjusted salary.
    pub adjusted: SalaryBreakdown,
    /// Employer-cost delta per month, across the whole headcount.
    pub monthly_cost_impact: Decimal,
    /// Monthly cost impact projected over twelve months.
    pub annual_cost_impact: Decimal,
}
