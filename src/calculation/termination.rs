//! Termination settlement calculation.
//!
//! Settlements follow the Angolan General Labour Law: outstanding salary
//! for days worked in the final month, proportional holiday pay,
//! proportional thirteenth month, and, for dismissal without just cause,
//! a severance indemnity scaled by tenure.

use rust_decimal::Decimal;

use crate::config::TerminationRules;
use crate::error::{EngineError, EngineResult};
use crate::models::{TerminationInput, TerminationSettlement, TerminationType};
use crate::money::round_half_up;

use super::service_period::calculate_service_period;

/// Commercial month used for daily salary rates.
const COMMERCIAL_MONTH_DAYS: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Computes the final settlement owed on termination of employment.
///
/// Every component is derived from the base salary and the completed
/// service period. Holiday pay accrues at 2.5 days per completed month
/// (30 days per service year) plus any untaken days carried in by the
/// caller. The severance indemnity applies only to dismissal without
/// just cause and is capped by [`TerminationRules::indemnity_cap_years`].
///
/// # Arguments
///
/// * `input` - Salary, employment dates, and the termination type
/// * `rules` - Termination rules from the tax table in force
///
/// # Returns
///
/// The itemised [`TerminationSettlement`], or an error for a negative
/// salary or a termination date on or before the hire date.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_termination_settlement;
/// use payroll_engine::config::TerminationRules;
/// use payroll_engine::models::{TerminationInput, TerminationType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let rules = TerminationRules { indemnity_cap_years: 12 };
/// let input = TerminationInput {
///     base_salary: Decimal::from(200000),
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
///     termination_date: NaiveDate::from_ymd_opt(2023, 6, 20).unwrap(),
///     termination_type: TerminationType::WithoutCause,
///     accrued_leave_days: 0,
/// };
/// let settlement = calculate_termination_settlement(&input, &rules)?;
/// assert_eq!(settlement.total_settlement.to_string(), "2183333.32");
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn calculate_termination_settlement(
    input: &TerminationInput,
    rules: &TerminationRules,
) -> EngineResult<TerminationSettlement> {
    use chrono::Datelike;

    if input.base_salary < Decimal::ZERO {
        return Err(EngineError::NegativeAmount {
            field: "base_salary".to_string(),
            value: input.base_salary,
        });
    }

    let period = calculate_service_period(input.hire_date, input.termination_date)?;
    let total_months = Decimal::from(period.total_months());
    let daily_rate = input.base_salary / COMMERCIAL_MONTH_DAYS;

    let balance_pay = round_half_up(daily_rate * Decimal::from(input.termination_date.day()));

    // 30 leave days accrue per service year, so 2.5 per completed month.
    let proportional_leave_days = total_months * COMMERCIAL_MONTH_DAYS / MONTHS_PER_YEAR;
    let leave_days = proportional_leave_days + Decimal::from(input.accrued_leave_days);
    let prorated_leave_pay = round_half_up(daily_rate * leave_days);

    let prorated_thirteenth_month =
        round_half_up(input.base_salary / MONTHS_PER_YEAR * total_months);

    let severance_indemnity = match input.termination_type {
        TerminationType::WithoutCause => {
            let tenure_years = total_months / MONTHS_PER_YEAR;
            let capped_years = tenure_years.min(Decimal::from(rules.indemnity_cap_years));
            round_half_up(input.base_salary * capped_years)
        }
        TerminationType::WithCause
        | TerminationType::Resignation
        | TerminationType::MutualAgreement => Decimal::ZERO,
    };

    let total_settlement =
        balance_pay + prorated_leave_pay + prorated_thirteenth_month + severance_indemnity;

    Ok(TerminationSettlement {
        balance_pay,
        prorated_leave_pay,
        prorated_thirteenth_month,
        severance_indemnity,
        total_settlement,
        years_of_service: period.years,
        months_of_service: period.months,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_rules() -> TerminationRules {
        TerminationRules {
            indemnity_cap_years: 12,
        }
    }

    fn create_test_input(termination_type: TerminationType) -> TerminationInput {
        TerminationInput {
            base_salary: dec("200000"),
            hire_date: date(2020, 1, 15),
            termination_date: date(2023, 6, 20),
            termination_type,
            accrued_leave_days: 0,
        }
    }

    #[test]
    fn test_without_cause_full_settlement() {
        let input = create_test_input(TerminationType::WithoutCause);
        let settlement = calculate_termination_settlement(&input, &create_test_rules()).unwrap();

        assert_eq!(settlement.years_of_service, 3);
        assert_eq!(settlement.months_of_service, 5);
        assert_eq!(settlement.balance_pay, dec("133333.33"));
        assert_eq!(settlement.prorated_leave_pay, dec("683333.33"));
        assert_eq!(settlement.prorated_thirteenth_month, dec("683333.33"));
        assert_eq!(settlement.severance_indemnity, dec("683333.33"));
        assert_eq!(settlement.total_settlement, dec("2183333.32"));
    }

    #[test]
    fn test_with_cause_forfeits_severance_only() {
        let input = create_test_input(TerminationType::WithCause);
        let settlement = calculate_termination_settlement(&input, &create_test_rules()).unwrap();

        assert_eq!(settlement.severance_indemnity, Decimal::ZERO);
        assert_eq!(settlement.balance_pay, dec("133333.33"));
        assert_eq!(settlement.prorated_leave_pay, dec("683333.33"));
        assert_eq!(settlement.total_settlement, dec("1499999.99"));
    }

    #[test]
    fn test_resignation_and_mutual_agreement_forfeit_severance() {
        for termination_type in [TerminationType::Resignation, TerminationType::MutualAgreement] {
            let input = create_test_input(termination_type);
            let settlement =
                calculate_termination_settlement(&input, &create_test_rules()).unwrap();
            assert_eq!(settlement.severance_indemnity, Decimal::ZERO);
        }
    }

    #[test]
    fn test_severance_capped_for_long_tenure() {
        let input = TerminationInput {
            hire_date: date(2000, 3, 1),
            ..create_test_input(TerminationType::WithoutCause)
        };
        let settlement = calculate_termination_settlement(&input, &create_test_rules()).unwrap();

        assert_eq!(settlement.years_of_service, 23);
        assert_eq!(settlement.months_of_service, 3);
        // 23.25 tenure years capped at 12.
        assert_eq!(settlement.severance_indemnity, dec("2400000"));
    }

    #[test]
    fn test_accrued_leave_days_added_to_proportional() {
        let input = TerminationInput {
            accrued_leave_days: 10,
            ..create_test_input(TerminationType::WithoutCause)
        };
        let settlement = calculate_termination_settlement(&input, &create_test_rules()).unwrap();

        // 102.5 proportional days plus 10 carried over.
        assert_eq!(settlement.prorated_leave_pay, dec("750000.00"));
        assert_eq!(settlement.total_settlement, dec("2249999.99"));
    }

    #[test]
    fn test_balance_follows_termination_day_of_month() {
        let input = TerminationInput {
            termination_date: date(2023, 1, 31),
            ..create_test_input(TerminationType::WithoutCause)
        };
        let settlement = calculate_termination_settlement(&input, &create_test_rules()).unwrap();

        assert_eq!(settlement.balance_pay, dec("206666.67"));
        assert_eq!(settlement.years_of_service, 3);
        assert_eq!(settlement.months_of_service, 0);
        assert_eq!(settlement.prorated_leave_pay, dec("600000.00"));
        assert_eq!(settlement.prorated_thirteenth_month, dec("600000.00"));
        assert_eq!(settlement.severance_indemnity, dec("600000.00"));
    }

    #[test]
    fn test_under_one_month_pays_balance_only() {
        let input = TerminationInput {
            hire_date: date(2024, 1, 10),
            termination_date: date(2024, 1, 25),
            ..create_test_input(TerminationType::WithoutCause)
        };
        let settlement = calculate_termination_settlement(&input, &create_test_rules()).unwrap();

        assert_eq!(settlement.balance_pay, dec("166666.67"));
        assert_eq!(settlement.prorated_leave_pay, dec("0.00"));
        assert_eq!(settlement.prorated_thirteenth_month, dec("0.00"));
        assert_eq!(settlement.severance_indemnity, Decimal::ZERO);
        assert_eq!(settlement.total_settlement, dec("166666.67"));
    }

    #[test]
    fn test_negative_base_salary_rejected() {
        let input = TerminationInput {
            base_salary: dec("-200000"),
            ..create_test_input(TerminationType::WithoutCause)
        };
        let result = calculate_termination_settlement(&input, &create_test_rules());

        match result {
            Err(EngineError::NegativeAmount { field, .. }) => assert_eq!(field, "base_salary"),
            other => panic!("Expected NegativeAmount, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_dates_propagate() {
        let input = TerminationInput {
            termination_date: date(2020, 1, 15),
            ..create_test_input(TerminationType::WithoutCause)
        };
        let result = calculate_termination_settlement(&input, &create_test_rules());
        assert!(matches!(
            result,
            Err(EngineError::InvalidServicePeriod { .. })
        ));
    }
}
