//! INSS contribution models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The worker/employer split of one INSS assessment.
///
/// Both shares are computed on the same capped base and rounded to the
/// cent. The worker share is withheld from pay; the employer share is paid
/// on top of gross and only shows up in employer cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InssContribution {
    /// Worker share, withheld from pay.
    pub worker: Decimal,
    /// Employer share, paid on top of gross.
    pub employer: Decimal,
    /// The contribution base after applying the ceiling.
    pub capped_base: Decimal,
}
