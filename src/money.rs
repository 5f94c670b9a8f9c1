//! Currency rounding rules shared by every calculation.
//!
//! All monetary amounts in the engine are Angolan kwanza (AOA) held as
//! [`Decimal`] values. Each pay component is rounded exactly once, at its
//! component boundary, with the single rule defined here; totals are then
//! exact sums of rounded components so that breakdown invariants hold to
//! the cent.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places carried by monetary amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Rounds a monetary amount to currency precision using round-half-up.
///
/// Midpoints round away from zero, which is the statutory convention for
/// kwanza amounts on payslips.
///
/// # Example
///
/// ```
/// use payroll_engine::money::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let exact = Decimal::from_str("2999.999").unwrap();
/// assert_eq!(round_half_up(exact), Decimal::from_str("3000.00").unwrap());
/// ```
pub fn round_half_up(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
