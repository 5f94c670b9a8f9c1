//! INSS contribution splitting.
//!
//! Worker and employer social-security contributions are assessed on the
//! same base, capped at the configured ceiling. Gross pay above the
//! ceiling is not contributory.

use rust_decimal::Decimal;

use crate::config::InssRates;
use crate::error::{EngineError, EngineResult};
use crate::models::InssContribution;
use crate::money::round_half_up;

/// Computes the INSS worker/employer split for a gross base.
///
/// The worker rate is caller-supplied so special schemes can override it;
/// the net-salary calculation passes the configured default. The employer
/// rate always comes from configuration.
///
/// # Arguments
///
/// * `gross_base` - Gross contributory earnings (must be non-negative)
/// * `worker_rate_percent` - Worker rate as a percentage (e.g., 3)
/// * `rates` - The INSS rates in force
///
/// # Returns
///
/// The contribution split with both shares rounded to the cent, or
/// [`EngineError::NegativeAmount`] for a negative base or rate.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_inss;
/// use payroll_engine::config::InssRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = InssRates {
///     worker_rate_percent: Decimal::from(3),
///     employer_rate_percent: Decimal::from(8),
///     ceiling: Decimal::from(1000000),
/// };
///
/// let split = calculate_inss(Decimal::from(1200000), Decimal::from(3), &rates).unwrap();
/// assert_eq!(split.capped_base, Decimal::from(1000000));
/// assert_eq!(split.worker, Decimal::from_str("30000.00").unwrap());
/// assert_eq!(split.employer, Decimal::from_str("80000.00").unwrap());
/// ```
pub fn calculate_inss(
    gross_base: Decimal,
    worker_rate_percent: Decimal,
    rates: &InssRates,
) -> EngineResult<InssContribution> {
    if gross_base < Decimal::ZERO {
        return Err(EngineError::NegativeAmount {
            field: "gross_base".to_string(),
            value: gross_base,
        });
    }
    if worker_rate_percent < Decimal::ZERO {
        return Err(EngineError::NegativeAmount {
            field: "worker_rate_percent".to_string(),
            value: worker_rate_percent,
        });
    }

    let capped_base = gross_base.min(rates.ceiling);
    let worker = round_half_up(capped_base * worker_rate_percent / Decimal::ONE_HUNDRED);
    let employer = round_half_up(capped_base * rates.employer_rate_percent / Decimal::ONE_HUNDRED);

    Ok(InssContribution {
        worker,
        employer,
        capped_base,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_rates() -> InssRates {
        InssRates {
            worker_rate_percent: dec("3"),
            employer_rate_percent: dec("8"),
            ceiling: dec("1000000"),
        }
    }

    #[test]
    fn test_gross_above_ceiling_is_capped() {
        let rates = create_test_rates();

        let split = calculate_inss(dec("1200000"), dec("3"), &rates).unwrap();
        assert_eq!(split.capped_base, dec("1000000"));
        assert_eq!(split.worker, dec("30000"));
        assert_eq!(split.employer, dec("80000"));
    }

    #[test]
    fn test_gross_below_ceiling_is_uncapped() {
        let rates = create_test_rates();

        let split = calculate_inss(dec("500000"), dec("3"), &rates).unwrap();
        assert_eq!(split.capped_base, dec("500000"));
        assert_eq!(split.worker, dec("15000"));
        assert_eq!(split.employer, dec("40000"));
    }

    #[test]
    fn test_gross_exactly_at_ceiling() {
        let rates = create_test_rates();

        let split = calculate_inss(dec("1000000"), dec("3"), &rates).unwrap();
        assert_eq!(split.capped_base, dec("1000000"));
        assert_eq!(split.worker, dec("30000"));
    }

    #[test]
    fn test_caller_supplied_worker_rate_overrides_default() {
        let rates = create_test_rates();

        let split = calculate_inss(dec("1200000"), dec("4"), &rates).unwrap();
        assert_eq!(split.worker, dec("40000"));
        // Employer share is never caller-supplied.
        assert_eq!(split.employer, dec("80000"));
    }

    #[test]
    fn test_shares_rounded_half_up() {
        let rates = create_test_rates();

        let split = calculate_inss(dec("333333.33"), dec("3"), &rates).unwrap();
        // 333333.33 x 3% = 9999.9999
        assert_eq!(split.worker, dec("10000.00"));
        // 333333.33 x 8% = 26666.6664
        assert_eq!(split.employer, dec("26666.67"));
    }

    #[test]
    fn test_zero_gross_owes_nothing() {
        let rates = create_test_rates();

        let split = calculate_inss(Decimal::ZERO, dec("3"), &rates).unwrap();
        assert_eq!(split.capped_base, Decimal::ZERO);
        assert_eq!(split.worker, Decimal::ZERO);
        assert_eq!(split.employer, Decimal::ZERO);
    }

    #[test]
    fn test_negative_gross_rejected() {
        let rates = create_test_rates();

        let result = calculate_inss(dec("-100"), dec("3"), &rates);
        match result {
            Err(EngineError::NegativeAmount { field, .. }) => {
                assert_eq!(field, "gross_base");
            }
            _ => panic!("Expected NegativeAmount error"),
        }
    }

    #[test]
    fn test_negative_worker_rate_rejected() {
        let rates = create_test_rates();

        let result = calculate_inss(dec("100000"), dec("-3"), &rates);
        match result {
            Err(EngineError::NegativeAmount { field, .. }) => {
                assert_eq!(field, "worker_rate_percent");
            }
            _ => panic!("Expected NegativeAmount error"),
        }
    }
}
