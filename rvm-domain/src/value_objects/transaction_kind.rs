// Transaction kind value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Bottles deposited at a machine in exchange for points.
    Earn,
    /// Points spent against a reward brand.
    Redeem,
}
