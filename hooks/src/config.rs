use std::time::Duration;

use env_common::{CanaryCheck, LiveLookup, PostTrafficSettings, PreTrafficSettings, PreviousTarget};
use env_defs::{DeploymentTarget, DEFAULT_VARIANT_NAME};
use env_utils::{optional_var, parse_var, parse_var_or, required_var, ConfigError};
use log::warn;

const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
const DEFAULT_QUALIFIER: &str = "live";

pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Configuration read from environment-style variables.
pub trait FromLookup: Sized {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>;

    fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }
}

pub fn api_timeout<F>(lookup: &F) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let secs: u64 = parse_var_or(lookup, "API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS)?;
    if secs == 0 {
        return Err(ConfigError::Invalid(
            "API_TIMEOUT_SECS".to_string(),
            secs.to_string(),
            "must be positive".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}

/// The timeout is needed before any event arrives, so a bad value falls back to the default.
pub fn api_timeout_from_env() -> Duration {
    api_timeout(&env_lookup).unwrap_or_else(|e| {
        warn!("{}, using {}s", e, DEFAULT_API_TIMEOUT_SECS);
        Duration::from_secs(DEFAULT_API_TIMEOUT_SECS)
    })
}

fn candidate_target<F>(lookup: &F) -> Result<DeploymentTarget, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let endpoint_name = required_var(lookup, "ENDPOINT_NAME")?;
    let variant_name = optional_var(lookup, "VARIANT_NAME")
        .unwrap_or_else(|| DEFAULT_VARIANT_NAME.to_string());
    let mut target = DeploymentTarget::new(&endpoint_name, &variant_name);
    target.function_version = parse_var_or(lookup, "CURRENT_VERSION", 0)?;
    Ok(target)
}

impl FromLookup for PreTrafficSettings {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let candidate = candidate_target(lookup)?;

        let live_lookup = optional_var(lookup, "FUNCTION_NAME").map(|function_name| LiveLookup {
            function_name,
            qualifier: optional_var(lookup, "LIVE_QUALIFIER")
                .unwrap_or_else(|| DEFAULT_QUALIFIER.to_string()),
        });

        let lower: i64 = parse_var(lookup, "CANARY_MIN")?;
        let upper: i64 = parse_var(lookup, "CANARY_MAX")?;
        if lower > upper {
            return Err(ConfigError::Invalid(
                "CANARY_MIN".to_string(),
                lower.to_string(),
                format!("greater than CANARY_MAX ({})", upper),
            ));
        }

        let check = CanaryCheck {
            payload: required_var(lookup, "CANARY_PAYLOAD")?.into_bytes(),
            content_type: optional_var(lookup, "CANARY_CONTENT_TYPE")
                .unwrap_or_else(|| env_common::DEFAULT_CONTENT_TYPE.to_string()),
            lower,
            upper,
        };

        Ok(PreTrafficSettings {
            candidate,
            live_lookup,
            check,
        })
    }
}

impl FromLookup for PostTrafficSettings {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let candidate = candidate_target(lookup)?;

        let target_instance_count: i32 = parse_var(lookup, "INSTANCE_COUNT")?;
        if target_instance_count < 0 {
            return Err(ConfigError::Invalid(
                "INSTANCE_COUNT".to_string(),
                target_instance_count.to_string(),
                "must not be negative".to_string(),
            ));
        }

        let previous = if let Some(endpoint_name) = optional_var(lookup, "PREVIOUS_ENDPOINT_NAME") {
            let variant_name = optional_var(lookup, "PREVIOUS_VARIANT_NAME")
                .unwrap_or_else(|| DEFAULT_VARIANT_NAME.to_string());
            PreviousTarget::Explicit(DeploymentTarget::new(&endpoint_name, &variant_name))
        } else if let Some(function_name) = optional_var(lookup, "FUNCTION_NAME") {
            // By post-traffic time the live alias already names the candidate
            PreviousTarget::Resolve(LiveLookup {
                function_name,
                qualifier: required_var(lookup, "PREVIOUS_QUALIFIER")?,
            })
        } else {
            PreviousTarget::None
        };

        Ok(PostTrafficSettings {
            candidate,
            previous,
            target_instance_count,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProxyConfig {
    pub endpoint_name: String,
}

impl FromLookup for ProxyConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(ProxyConfig {
            endpoint_name: required_var(lookup, "ENDPOINT_NAME")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    const PRE_TRAFFIC_VARS: &[(&str, &str)] = &[
        ("ENDPOINT_NAME", "e-green"),
        ("CURRENT_VERSION", "4"),
        ("FUNCTION_NAME", "regression"),
        ("CANARY_PAYLOAD", "1:1 2:0.555"),
        ("CANARY_MIN", "8"),
        ("CANARY_MAX", "10"),
    ];

    #[test]
    fn test_pre_traffic_settings_with_defaults() {
        let settings = PreTrafficSettings::from_lookup(&lookup_from(PRE_TRAFFIC_VARS)).unwrap();

        let mut candidate = DeploymentTarget::new("e-green", "AllTraffic");
        candidate.function_version = 4;
        assert_eq!(
            settings,
            PreTrafficSettings {
                candidate,
                live_lookup: Some(LiveLookup {
                    function_name: "regression".to_string(),
                    qualifier: "live".to_string(),
                }),
                check: CanaryCheck {
                    payload: b"1:1 2:0.555".to_vec(),
                    content_type: "text/libsvm".to_string(),
                    lower: 8,
                    upper: 10,
                },
            }
        );
    }

    #[test]
    fn test_pre_traffic_without_function_skips_live_lookup() {
        let vars: Vec<_> = PRE_TRAFFIC_VARS
            .iter()
            .copied()
            .filter(|(k, _)| *k != "FUNCTION_NAME")
            .collect();
        let settings = PreTrafficSettings::from_lookup(&lookup_from(&vars)).unwrap();
        assert_eq!(settings.live_lookup, None);
    }

    #[test]
    fn test_pre_traffic_rejects_inverted_range() {
        let mut vars = PRE_TRAFFIC_VARS.to_vec();
        vars.push(("CANARY_MIN", "11"));
        let err = PreTrafficSettings::from_lookup(&lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref name, _, _) if name == "CANARY_MIN"));
    }

    #[test]
    fn test_pre_traffic_requires_payload() {
        let vars: Vec<_> = PRE_TRAFFIC_VARS
            .iter()
            .copied()
            .filter(|(k, _)| *k != "CANARY_PAYLOAD")
            .collect();
        assert_eq!(
            PreTrafficSettings::from_lookup(&lookup_from(&vars)),
            Err(ConfigError::Missing("CANARY_PAYLOAD".to_string()))
        );
    }

    #[test]
    fn test_post_traffic_explicit_previous_wins() {
        let settings = PostTrafficSettings::from_lookup(&lookup_from(&[
            ("ENDPOINT_NAME", "e-green"),
            ("INSTANCE_COUNT", "0"),
            ("PREVIOUS_ENDPOINT_NAME", "e-blue"),
            ("FUNCTION_NAME", "regression"),
        ]))
        .unwrap();

        assert_eq!(
            settings.previous,
            PreviousTarget::Explicit(DeploymentTarget::new("e-blue", "AllTraffic"))
        );
        assert_eq!(settings.target_instance_count, 0);
    }

    #[test]
    fn test_post_traffic_resolves_previous_qualifier() {
        let settings = PostTrafficSettings::from_lookup(&lookup_from(&[
            ("ENDPOINT_NAME", "e-green"),
            ("INSTANCE_COUNT", "1"),
            ("FUNCTION_NAME", "regression"),
            ("PREVIOUS_QUALIFIER", "3"),
        ]))
        .unwrap();

        assert_eq!(
            settings.previous,
            PreviousTarget::Resolve(LiveLookup {
                function_name: "regression".to_string(),
                qualifier: "3".to_string(),
            })
        );
    }

    #[test]
    fn test_post_traffic_resolution_requires_previous_qualifier() {
        assert_eq!(
            PostTrafficSettings::from_lookup(&lookup_from(&[
                ("ENDPOINT_NAME", "e-green"),
                ("INSTANCE_COUNT", "0"),
                ("FUNCTION_NAME", "regression"),
            ])),
            Err(ConfigError::Missing("PREVIOUS_QUALIFIER".to_string()))
        );
    }

    #[test]
    fn test_post_traffic_without_previous_has_nothing_to_cool_down() {
        let settings = PostTrafficSettings::from_lookup(&lookup_from(&[
            ("ENDPOINT_NAME", "e-green"),
            ("INSTANCE_COUNT", "0"),
        ]))
        .unwrap();
        assert_eq!(settings.previous, PreviousTarget::None);
    }

    #[test]
    fn test_post_traffic_rejects_negative_instance_count() {
        let err = PostTrafficSettings::from_lookup(&lookup_from(&[
            ("ENDPOINT_NAME", "e-green"),
            ("INSTANCE_COUNT", "-1"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref name, _, _) if name == "INSTANCE_COUNT"));
    }

    #[test]
    fn test_api_timeout() {
        assert_eq!(
            api_timeout(&lookup_from(&[])).unwrap(),
            Duration::from_secs(10)
        );
        assert_eq!(
            api_timeout(&lookup_from(&[("API_TIMEOUT_SECS", "3")])).unwrap(),
            Duration::from_secs(3)
        );
        assert!(api_timeout(&lookup_from(&[("API_TIMEOUT_SECS", "0")])).is_err());
    }
}
