pub mod in_memory_fleet;
pub mod seed_files;

pub use in_memory_fleet::*;
pub use seed_files::*;
