pub mod fleet_directory;

pub use fleet_directory::*;
