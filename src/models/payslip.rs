//! Payslip input and salary breakdown models.
//!
//! This module defines the input to a monthly net-salary calculation and
//! the full breakdown it produces.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Earnings, subsidies, and voluntary deductions for one pay period.
///
/// All amounts are monthly values in kwanza. `Default` yields a payslip
/// with every amount at zero, which keeps call sites terse when only a few
/// fields apply.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayslipInput;
/// use rust_decimal::Decimal;
///
/// let input = PayslipInput {
///     base_salary: Decimal::from(200000),
///     dependents: 2,
///     ..Default::default()
/// };
/// assert_eq!(input.bonus, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipInput {
    /// Contractual base salary.
    pub base_salary: Decimal,
    /// Overtime earnings for the period, as a monetary amount.
    #[serde(default)]
    pub overtime: Decimal,
    /// Bonus payments for the period.
    #[serde(default)]
    pub bonus: Decimal,
    /// Food subsidy (subsídio de alimentação); outside the taxable base.
    #[serde(default)]
    pub food_subsidy: Decimal,
    /// Transport subsidy (subsídio de transporte); outside the taxable base.
    #[serde(default)]
    pub transport_subsidy: Decimal,
    /// Other taxable earnings.
    #[serde(default)]
    pub other_earnings: Decimal,
    /// Number of declared dependents.
    #[serde(default)]
    pub dependents: u32,
    /// Loan installment deductions for the period.
    #[serde(default)]
    pub loan_deductions: Decimal,
    /// Other deductions (advances, fines, unpaid absences).
    #[serde(default)]
    pub other_deductions: Decimal,
}

/// The complete decomposition of one month's pay.
///
/// Component amounts (IRT, INSS shares) are rounded to the cent when they
/// are computed; the totals here are exact sums of those rounded
/// components, so the documented invariants hold without cent drift:
///
/// - `net_salary = total_gross_earnings + food_subsidy + transport_subsidy
///   − total_deductions`
/// - `total_employer_cost = total_gross_earnings + food_subsidy +
///   transport_subsidy + inss_employer`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Contractual base salary, echoed from the input.
    pub base_salary: Decimal,
    /// Taxable earnings: base salary + overtime + bonus + other earnings.
    pub total_gross_earnings: Decimal,
    /// Food subsidy, echoed from the input.
    pub food_subsidy: Decimal,
    /// Transport subsidy, echoed from the input.
    pub transport_subsidy: Decimal,
    /// The base the IRT was assessed on (equals total gross earnings).
    pub taxable_base: Decimal,
    /// IRT owed for the period.
    pub irt: Decimal,
    /// Worker INSS contribution, withheld from pay.
    pub inss_worker: Decimal,
    /// Employer INSS contribution, paid on top of gross.
    pub inss_employer: Decimal,
    /// IRT + worker INSS + loan and other deductions.
    pub total_deductions: Decimal,
    /// Amount payable to the worker.
    pub net_salary: Decimal,
    /// Total monthly cost to the employer.
    pub total_employer_cost: Decimal,
    /// Number of declared dependents applied to the IRT assessment.
    pub dependents: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_payslip_is_all_zero() {
        let input = PayslipInput::default();
        assert_eq!(input.base_salary, Decimal::ZERO);
        assert_eq!(input.overtime, Decimal::ZERO);
        assert_eq!(input.loan_deductions, Decimal::ZERO);
        assert_eq!(input.dependents, 0);
    }

    #[test]
    fn test_payslip_deserializes_with_missing_optional_fields() {
        let json = r#"{"base_salary": "250000"}"#;
        let input: PayslipInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.base_salary, dec("250000"));
        assert_eq!(input.food_subsidy, Decimal::ZERO);
        assert_eq!(input.dependents, 0);
    }

    #[test]
    fn test_breakdown_serializes_with_snake_case_keys() {
        let breakdown = SalaryBreakdown {
            base_salary: dec("200000"),
            total_gross_earnings: dec("200000"),
            food_subsidy: Decimal::ZERO,
            transport_subsidy: Decimal::ZERO,
            taxable_base: dec("200000"),
            irt: dec("17500.00"),
            inss_worker: dec("6000.00"),
            inss_employer: dec("16000.00"),
            total_deductions: dec("23500.00"),
            net_salary: dec("176500.00"),
            total_employer_cost: dec("216000.00"),
            dependents: 0,
        };

        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["total_gross_earnings"], "200000");
        assert_eq!(json["inss_worker"], "6000.00");
        assert_eq!(json["net_salary"], "176500.00");
    }
}
