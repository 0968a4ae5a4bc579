use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlippError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Logger error: {message}")]
    LoggerError { message: String },
}

impl FlippError {
    /// Process exit status reported by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            FlippError::IoError(_) => 1,
            FlippError::ConfigValidationError { .. } | FlippError::InvalidConfigValueError { .. } => 2,
            FlippError::LoggerError { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlippError>;
