pub mod admin_handlers;
pub mod machine_handlers;
pub mod ops_handlers;
pub mod session_handlers;

pub use admin_handlers::*;
pub use machine_handlers::*;
pub use ops_handlers::*;
pub use session_handlers::*;
