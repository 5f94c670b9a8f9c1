//! Salary adjustment simulation.
//!
//! Answers the budgeting question behind a rise: what a percentage
//! adjustment does to one employee's breakdown and to the employer's
//! monthly and annual cost across a headcount.

use rust_decimal::Decimal;

use crate::config::TaxTableConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AdjustmentImpact, AdjustmentInput, PayslipInput};
use crate::money::round_half_up;

use super::net_salary::calculate_net_salary;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Simulates a percentage salary adjustment.
///
/// The current and adjusted salaries are each run through the full net
/// salary calculation, so the impact reflects bracket changes, the INSS
/// ceiling, and dependent deductions rather than a flat percentage of
/// cost. Reductions are allowed down to -100%.
///
/// # Arguments
///
/// * `input` - Current salary, adjustment percentage, dependents, and
///   the headcount receiving the adjustment
/// * `table` - The tax table in force
///
/// # Returns
///
/// The [`AdjustmentImpact`] with both breakdowns and the cost deltas,
/// or an error for a negative salary or an adjustment below -100%.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::calculation::simulate_salary_adjustment;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::AdjustmentInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/angola")?;
/// let table = loader.table_for(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())?;
///
/// let input = AdjustmentInput {
///     current_salary: Decimal::from(200000),
///     adjustment_percent: Decimal::from(10),
///     dependents: 0,
///     headcount: 5,
/// };
/// let impact = simulate_salary_adjustment(&input, table)?;
/// println!("Annual cost impact: {}", impact.annual_cost_impact);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn simulate_salary_adjustment(
    input: &AdjustmentInput,
    table: &TaxTableConfig,
) -> EngineResult<AdjustmentImpact> {
    if input.current_salary < Decimal::ZERO {
        return Err(EngineError::NegativeAmount {
            field: "current_salary".to_string(),
            value: input.current_salary,
        });
    }
    if input.adjustment_percent < -Decimal::ONE_HUNDRED {
        return Err(EngineError::InvalidInput {
            field: "adjustment_percent".to_string(),
            message: format!(
                "cannot reduce salary below zero, got {}%",
                input.adjustment_percent
            ),
        });
    }

    let adjusted_salary = round_half_up(
        input.current_salary * (Decimal::ONE + input.adjustment_percent / Decimal::ONE_HUNDRED),
    );

    let current = calculate_net_salary(
        &PayslipInput {
            base_salary: input.current_salary,
            dependents: input.dependents,
            ..Default::default()
        },
        table,
    )?;
    let adjusted = calculate_net_salary(
        &PayslipInput {
            base_salary: adjusted_salary,
            dependents: input.dependents,
            ..Default::default()
        },
        table,
    )?;

    let monthly_cost_impact = (adjusted.total_employer_cost - current.total_employer_cost)
        * Decimal::from(input.headcount);
    let annual_cost_impact = monthly_cost_impact * MONTHS_PER_YEAR;

    Ok(AdjustmentImpact {
        current_salary: input.current_salary,
        adjusted_salary,
        adjustment_percent: input.adjustment_percent,
        headcount: input.headcount,
        current,
        adjusted,
        monthly_cost_impact,
        annual_cost_impact,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InssRates, IrtTable, OvertimeRates, TaxBracket, TerminationRules};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bracket(lower: &str, upper: Option<&str>, rate: &str, deduction: &str) -> TaxBracket {
        TaxBracket {
            lower_bound: dec(lower),
            upper_bound: upper.map(dec),
            rate: dec(rate),
            deduction: dec(deduction),
        }
    }

    fn create_test_config() -> TaxTableConfig {
        TaxTableConfig::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            IrtTable::new(
                dec("15000"),
                vec![
                    bracket("0", Some("70000"), "0.00", "0"),
                    bracket("70000", Some("100000"), "0.10", "7000"),
                    bracket("100000", Some("150000"), "0.13", "10000"),
                    bracket("150000", Some("200000"), "0.16", "14500"),
                    bracket("200000", Some("300000"), "0.19", "20500"),
                    bracket("300000", Some("500000"), "0.22", "29500"),
                    bracket("500000", Some("1000000"), "0.25", "42500"),
                    bracket("1000000", Some("1500000"), "0.28", "67500"),
                    bracket("1500000", Some("2000000"), "0.31", "97500"),
                    bracket("2000000", Some("2500000"), "0.34", "132500"),
                    bracket("2500000", Some("5000000"), "0.37", "172500"),
                    bracket("5000000", None, "0.40", "247500"),
                ],
            )
            .unwrap(),
            InssRates {
                worker_rate_percent: dec("3"),
                employer_rate_percent: dec("8"),
                ceiling: dec("1000000"),
            },
            OvertimeRates {
                day_surcharge_percent: dec("50"),
                night_surcharge_percent: dec("75"),
                rest_day_surcharge_percent: dec("100"),
            },
            TerminationRules {
                indemnity_cap_years: 12,
            },
        )
    }

    #[test]
    fn test_ten_percent_rise_across_headcount() {
        let config = create_test_config();
        let input = AdjustmentInput {
            current_salary: dec("200000"),
            adjustment_percent: dec("10"),
            dependents: 0,
            headcount: 5,
        };

        let impact = simulate_salary_adjustment(&input, &config).unwrap();

        assert_eq!(impact.adjusted_salary, dec("220000"));
        assert_eq!(impact.current.total_employer_cost, dec("216000"));
        assert_eq!(impact.adjusted.total_employer_cost, dec("237600"));
        assert_eq!(impact.adjusted.net_salary, dec("192100"));
        assert_eq!(impact.monthly_cost_impact, dec("108000"));
        assert_eq!(impact.annual_cost_impact, dec("1296000"));
    }

    #[test]
    fn test_dependents_carried_into_both_breakdowns() {
        let config = create_test_config();
        let input = AdjustmentInput {
            current_salary: dec("200000"),
            adjustment_percent: dec("10"),
            dependents: 2,
            headcount: 1,
        };

        let impact = simulate_salary_adjustment(&input, &config).unwrap();

        assert_eq!(impact.current.dependents, 2);
        assert_eq!(impact.adjusted.dependents, 2);
        assert_eq!(impact.current.irt, dec("12700"));
        // 220000 - 30000 lands in the 16% bracket.
        assert_eq!(impact.adjusted.irt, dec("15900"));
    }

    #[test]
    fn test_reduction_yields_negative_impact() {
        let config = create_test_config();
        let input = AdjustmentInput {
            current_salary: dec("200000"),
            adjustment_percent: dec("-10"),
            dependents: 0,
            headcount: 1,
        };

        let impact = simulate_salary_adjustment(&input, &config).unwrap();

        assert_eq!(impact.adjusted_salary, dec("180000"));
        assert_eq!(impact.monthly_cost_impact, dec("-21600"));
        assert!(impact.annual_cost_impact < Decimal::ZERO);
    }

    #[test]
    fn test_fractional_percent_rounds_adjusted_salary() {
        let config = create_test_config();
        let input = AdjustmentInput {
            current_salary: dec("123456.78"),
            adjustment_percent: dec("7.5"),
            dependents: 0,
            headcount: 1,
        };

        let impact = simulate_salary_adjustment(&input, &config).unwrap();
        // 123456.78 * 1.075 = 132716.0385
        assert_eq!(impact.adjusted_salary, dec("132716.04"));
    }

    #[test]
    fn test_full_reduction_allowed() {
        let config = create_test_config();
        let input = AdjustmentInput {
            current_salary: dec("200000"),
            adjustment_percent: dec("-100"),
            dependents: 0,
            headcount: 1,
        };

        let impact = simulate_salary_adjustment(&input, &config).unwrap();
        assert_eq!(impact.adjusted_salary, Decimal::ZERO);
        assert_eq!(impact.adjusted.net_salary, Decimal::ZERO);
    }

    #[test]
    fn test_below_full_reduction_rejected() {
        let config = create_test_config();
        let input = AdjustmentInput {
            current_salary: dec("200000"),
            adjustment_percent: dec("-100.01"),
            dependents: 0,
            headcount: 1,
        };

        let result = simulate_salary_adjustment(&input, &config);
        match result {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "adjustment_percent");
            }
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_current_salary_rejected() {
        let config = create_test_config();
        let input = AdjustmentInput {
            current_salary: dec("-1"),
            adjustment_percent: dec("10"),
            dependents: 0,
            headcount: 1,
        };

        let result = simulate_salary_adjustment(&input, &config);
        assert!(matches!(result, Err(EngineError::NegativeAmount { .. })));
    }

    #[test]
    fn test_zero_headcount_has_no_cost_impact() {
        let config = create_test_config();
        let input = AdjustmentInput {
            current_salary: dec("200000"),
            adjustment_percent: dec("10"),
            dependents: 0,
            headcount: 0,
        };

        let impact = simulate_salary_adjustment(&input, &config).unwrap();
        assert_eq!(impact.monthly_cost_impact, Decimal::ZERO);
        assert_eq!(impact.annual_cost_impact, Decimal::ZERO);
    }
}
