use std::env;

/// Log filter used when neither `RUST_LOG` nor `READINESS_LOG_LEVEL` is set.
///
/// Kept quiet so log lines do not interleave with the interactive prompts.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings read from the environment (and an optional `.env` file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    /// Disable colors in the interactive wizard.
    pub plain: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_level =
            lookup("READINESS_LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let plain = match lookup("READINESS_PLAIN") {
            Some(value) => parse_flag("READINESS_PLAIN", &value)?,
            None => false,
        };

        Ok(Self { log_level, plain })
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a boolean flag, got '{value}'")]
    InvalidFlag { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_env_missing() {
        let config = config(&[]).unwrap();
        assert_eq!(config.log_level, "warn");
        assert!(!config.plain);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[("READINESS_LOG_LEVEL", "debug"), ("READINESS_PLAIN", "Yes")]).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.plain);
    }

    #[test]
    fn rejects_unknown_flag_values() {
        let err = config(&[("READINESS_PLAIN", "sometimes")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "READINESS_PLAIN must be a boolean flag, got 'sometimes'"
        );
    }
}
