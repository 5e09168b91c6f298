//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(ApplicationError::Domain(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Domain(
                    DomainError::InvalidBounds { .. }
                    | DomainError::InvalidIdentifier(_)
                    | DomainError::DepthLimit { .. },
                ) => crate::exitcode::USAGE,
                ApplicationError::Domain(_) => crate::exitcode::SOFTWARE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exitcode;

    #[test]
    fn given_invalid_bounds_when_exit_code_then_usage() {
        let err = CliError::from(DomainError::InvalidBounds { min: 2, max: 1 });
        assert_eq!(err.exit_code(), exitcode::USAGE);
    }

    #[test]
    fn given_config_error_when_exit_code_then_config() {
        let err = CliError::from(ApplicationError::Config {
            message: "bad".into(),
        });
        assert_eq!(err.exit_code(), exitcode::CONFIG);
    }
}
