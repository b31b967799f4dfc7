use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DirectoryError {
    #[error("user {0} not found")]
    UserNotFound(u64),
    #[error("machine '{0}' not found")]
    MachineNotFound(String),
    #[error("machine code '{0}' already exists")]
    DuplicateCode(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
