//! 13th-month salary model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The 13th-month salary (subsídio de Natal) for a reference year.
///
/// The gross amount is proportional to months worked in the year. It is
/// paid in two installments: the first is half of the gross, the second is
/// the remainder after deductions, so that
/// `first_installment + second_installment = net`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThirteenthSalary {
    /// Months worked in the reference year (1 to 12).
    pub months_worked: u32,
    /// Gross 13th salary: base salary / 12 × months worked.
    pub gross: Decimal,
    /// IRT assessed on the gross amount.
    pub irt: Decimal,
    /// Worker INSS contribution on the gross amount.
    pub inss_worker: Decimal,
    /// Net 13th salary after deductions.
    pub net: Decimal,
    /// First installment: half of the gross amount.
    pub first_installment: Decimal,
    /// Second installment: remainder after the first installment and the
    /// deductions.
    pub second_installment: Decimal,
}
