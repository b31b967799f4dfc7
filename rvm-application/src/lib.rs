// RVM Admin Application Layer

pub mod commands;
pub mod error;
pub mod metrics;
pub mod queries;
pub mod sessions;
pub mod state;

#[cfg(test)]
mod test_support;

pub use error::AppError;
pub use metrics::Metrics;
pub use sessions::SessionStore;
pub use state::AppState;
