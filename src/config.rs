//! Process configuration, read once from the environment at startup.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "password";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set to a non-empty value")]
    MissingJwtSecret,

    #[error("invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub admin_username: String,
    pub admin_password: String,
    pub metrics_enabled: bool,
    pub request_timeout: Duration,
    pub log_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingJwtSecret)?;

        let port = match get("PORT") {
            Some(raw) => parse_number("PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        let request_timeout_secs = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => parse_number("REQUEST_TIMEOUT_SECS", &raw)?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let metrics_enabled = match get("METRICS_ENABLED") {
            Some(raw) => parse_bool("METRICS_ENABLED", &raw)?,
            None => true,
        };

        Ok(Self {
            port,
            jwt_secret,
            admin_username: get("DASHBOARD_ADMIN_USERNAME").unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password: get("DASHBOARD_ADMIN_PASSWORD").unwrap_or_else(|| DEFAULT_ADMIN_PASSWORD.to_string()),
            metrics_enabled,
            request_timeout: Duration::from_secs(request_timeout_secs),
            log_dir: get("LOG_DIR").map(PathBuf::from),
        })
    }

    pub fn uses_default_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_number<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: raw.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        let cfg = config_from(&[("JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(cfg.port, 8081);
        assert_eq!(cfg.admin_username, "admin");
        assert!(cfg.uses_default_password());
        assert!(cfg.metrics_enabled);
        assert_eq!(cfg.request_timeout, Duration::from_secs(30));
        assert_eq!(cfg.log_dir, None);
        assert_eq!(cfg.listen_addr(), "0.0.0.0:8081");
    }

    #[test]
    fn missing_or_blank_secret_fails_closed() {
        assert_eq!(config_from(&[]).unwrap_err(), ConfigError::MissingJwtSecret);
        assert_eq!(config_from(&[("JWT_SECRET", "   ")]).unwrap_err(), ConfigError::MissingJwtSecret);
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = config_from(&[
            ("JWT_SECRET", "s3cret"),
            ("PORT", "9090"),
            ("METRICS_ENABLED", "false"),
            ("DASHBOARD_ADMIN_PASSWORD", "hunter2"),
            ("LOG_DIR", "/var/log/kubedash"),
        ])
        .unwrap();
        assert_eq!(cfg.port, 9090);
        assert!(!cfg.metrics_enabled);
        assert!(!cfg.uses_default_password());
        assert_eq!(cfg.log_dir, Some(PathBuf::from("/var/log/kubedash")));
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = config_from(&[("JWT_SECRET", "s"), ("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));

        let err = config_from(&[("JWT_SECRET", "s"), ("METRICS_ENABLED", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "METRICS_ENABLED", .. }));
    }
}
