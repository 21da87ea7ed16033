use env_defs::ApiError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Function {0} at {1} has no {2} environment variable")]
    MissingVariable(String, String, String),

    #[error("Function {0} at {1} has invalid {2} value '{3}'")]
    InvalidVariable(String, String, String, String),

    #[error("Failed to look up function configuration: {0}")]
    Api(#[from] ApiError),
}
