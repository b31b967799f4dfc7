use rvm_domain::DirectoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl From<DirectoryError> for AppError {
    fn from(value: DirectoryError) -> Self {
        match value {
            DirectoryError::UserNotFound(_) => AppError::NotFound("User not found".to_string()),
            DirectoryError::MachineNotFound(_) => {
                AppError::NotFound("Machine not found".to_string())
            }
            DirectoryError::DuplicateCode(code) => {
                AppError::Conflict(format!("Machine {} already exists", code))
            }
            DirectoryError::InvalidArgument(msg) => AppError::BadRequest(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_errors_map_to_fixed_messages() {
        let err = AppError::from(DirectoryError::UserNotFound(9));
        assert_eq!(err.to_string(), "User not found");
        let err = AppError::from(DirectoryError::MachineNotFound("M9".to_string()));
        assert_eq!(err.to_string(), "Machine not found");
        let err = AppError::from(DirectoryError::DuplicateCode("M001".to_string()));
        assert!(matches!(err, AppError::Conflict(ref msg) if msg.contains("M001")));
        let err = AppError::from(DirectoryError::InvalidArgument("max_capacity".to_string()));
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
