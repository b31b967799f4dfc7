// Domain value objects
pub mod transaction_kind;

pub use transaction_kind::*;
