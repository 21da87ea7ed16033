use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} not found")]
    Missing(String),

    #[error("Environment variable {0} has invalid value '{1}': {2}")]
    Invalid(String, String, String),
}

/// Reads a variable through `lookup`, treating blank values as unset.
pub fn optional_var<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn required_var<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional_var(lookup, name).ok_or_else(|| ConfigError::Missing(name.to_string()))
}

pub fn parse_var<F, T>(lookup: &F, name: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = required_var(lookup, name)?;
    raw.parse::<T>()
        .map_err(|e| ConfigError::Invalid(name.to_string(), raw.clone(), e.to_string()))
}

pub fn parse_var_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_var(lookup, name) {
        Some(_) => parse_var(lookup, name),
        None => Ok(default),
    }
}
