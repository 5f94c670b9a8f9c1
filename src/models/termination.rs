//! Termination settlement models.
//!
//! This module defines the grounds on which a contract ends, the inputs
//! for a settlement, and the settlement itself.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Grounds on which an employment contract ends.
///
/// Severance indemnity is owed only for employer-initiated dismissal
/// without just cause; every other ground settles without indemnity.
///
/// # Example
///
/// ```
/// use payroll_engine::models::TerminationType;
///
/// let json = serde_json::to_string(&TerminationType::WithoutCause).unwrap();
/// assert_eq!(json, "\"without_cause\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationType {
    /// Employer-initiated dismissal without just cause (despedimento sem
    /// justa causa).
    WithoutCause,
    /// Employer-initiated dismissal with just cause.
    WithCause,
    /// Worker-initiated resignation.
    Resignation,
    /// Termination by mutual agreement.
    MutualAgreement,
}

/// Inputs for a termination settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationInput {
    /// Base salary at the date of termination.
    pub base_salary: Decimal,
    /// First day of the employment contract.
    pub hire_date: NaiveDate,
    /// Last day of the employment contract.
    pub termination_date: NaiveDate,
    /// Ground on which the contract ends.
    pub termination_type: TerminationType,
    /// Accrued untaken leave days carried from earlier periods, paid out
    /// through the leave component of the settlement.
    #[serde(default)]
    pub accrued_leave_days: u32,
}

/// The complete termination settlement.
///
/// `total_settlement` is the exact sum of the four pay components; the
/// service fields carry the calendar (years, months) difference between
/// hire and termination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminationSettlement {
    /// Pay for days worked in the final month, over the 30-day commercial
    /// month.
    pub balance_pay: Decimal,
    /// Proportional leave entitlement for the service period, plus payout
    /// of accrued untaken leave days.
    pub prorated_leave_pay: Decimal,
    /// 13th-month salary proportional to months of service.
    pub prorated_thirteenth_month: Decimal,
    /// Severance indemnity; zero unless the termination is without cause.
    pub severance_indemnity: Decimal,
    /// Exact sum of the four pay components.
    pub total_settlement: Decimal,
    /// Full years of service at termination.
    pub years_of_service: u32,
    /// Months of service beyond the full years (0 to 11).
    pub months_of_service: u32,
}
