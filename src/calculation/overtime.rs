//! Overtime pay with statutory surcharges.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::OvertimeRates;
use crate::error::{EngineError, EngineResult};
use crate::money::round_half_up;

/// Classification of overtime hours for surcharge purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeKind {
    /// Overtime worked during daytime on a normal working day.
    Day,
    /// Overtime worked at night.
    Night,
    /// Overtime worked on a weekly rest day or public holiday.
    RestDay,
}

impl OvertimeKind {
    /// Surcharge percentage applicable to this kind of overtime.
    pub fn surcharge_percent(self, rates: &OvertimeRates) -> Decimal {
        match self {
            OvertimeKind::Day => rates.day_surcharge_percent,
            OvertimeKind::Night => rates.night_surcharge_percent,
            OvertimeKind::RestDay => rates.rest_day_surcharge_percent,
        }
    }
}

/// Computes pay for a block of overtime hours.
///
/// The hourly rate is increased by the surcharge configured for the
/// overtime kind, so ten daytime hours at a 50% surcharge pay one and a
/// half times the plain rate.
///
/// # Arguments
///
/// * `hours` - Overtime hours worked, may be fractional
/// * `hourly_rate` - Plain hourly rate before any surcharge
/// * `kind` - Overtime classification selecting the surcharge
/// * `rates` - Surcharge percentages from the tax table in force
///
/// # Returns
///
/// The overtime amount rounded to the cent, or
/// [`EngineError::NegativeAmount`] for negative hours or rate.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::{calculate_overtime_pay, OvertimeKind};
/// use payroll_engine::config::OvertimeRates;
/// use rust_decimal::Decimal;
///
/// let rates = OvertimeRates {
///     day_surcharge_percent: Decimal::from(50),
///     night_surcharge_percent: Decimal::from(75),
///     rest_day_surcharge_percent: Decimal::from(100),
/// };
/// let pay = calculate_overtime_pay(
///     Decimal::from(10),
///     Decimal::from(1000),
///     OvertimeKind::Night,
///     &rates,
/// )?;
/// assert_eq!(pay.to_string(), "17500.00");
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn calculate_overtime_pay(
    hours: Decimal,
    hourly_rate: Decimal,
    kind: OvertimeKind,
    rates: &OvertimeRates,
) -> EngineResult<Decimal> {
    if hours < Decimal::ZERO {
        return Err(EngineError::NegativeAmount {
            field: "hours".to_string(),
            value: hours,
        });
    }
    if hourly_rate < Decimal::ZERO {
        return Err(EngineError::NegativeAmount {
            field: "hourly_rate".to_string(),
            value: hourly_rate,
        });
    }

    let multiplier = Decimal::ONE + kind.surcharge_percent(rates) / Decimal::ONE_HUNDRED;
    Ok(round_half_up(hours * hourly_rate * multiplier))
}
