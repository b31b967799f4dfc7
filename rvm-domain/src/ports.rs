// Repository Port Traits (Interfaces)
// Define what the application needs from infrastructure

pub mod repositories;

pub use repositories::*;
