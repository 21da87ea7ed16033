mod config;
mod logging;
mod prediction;
mod string_utils;

pub use config::{
    optional_var, parse_var, parse_var_or, required_var, ConfigError,
};
pub use logging::setup_logging;
pub use prediction::{parse_scalar_prediction, PredictionParseError};
pub use string_utils::{rebase_key, trial_name_from_commit};
