// Domain entities

pub mod config;
pub mod machine;
pub mod report;
pub mod seed;
pub mod transaction;
pub mod user;

pub use config::*;
pub use machine::*;
pub use report::*;
pub use seed::*;
pub use transaction::*;
pub use user::*;
