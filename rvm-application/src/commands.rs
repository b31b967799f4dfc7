pub mod machine_commands;
pub mod session_commands;
