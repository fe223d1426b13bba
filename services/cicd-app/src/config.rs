use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_VERSION: &str = "1.0.0";
const DEFAULT_HOSTNAME: &str = "unknown";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0:?}")]
    InvalidPort(String),
}

/// 起動時に一度だけ構築される設定（以降は読み取り専用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub version: String,
    pub hostname: String,
    pub port: u16,
    pub environment: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl ServiceConfig {
    /// 環境変数から設定を読み込む（`.env` があれば先に反映）
    pub fn from_env() -> Result<Self, ConfigError> {
        // .env が無いのは正常
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意のルックアップ関数から設定を組み立てる
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            version: lookup("APP_VERSION").unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            hostname: lookup("HOSTNAME").unwrap_or_else(|| DEFAULT_HOSTNAME.to_string()),
            port,
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = ServiceConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.hostname, "unknown");
        assert_eq!(config.port, 5000);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_values_are_taken_from_lookup() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("APP_VERSION", "9.9.9"),
            ("HOSTNAME", "build-runner"),
            ("PORT", "8080"),
            ("ENVIRONMENT", "production"),
        ]))
        .unwrap();

        assert_eq!(config.version, "9.9.9");
        assert_eq!(config.hostname, "build-runner");
        assert_eq!(config.port, 8080);
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn test_empty_version_is_kept_verbatim() {
        let config = ServiceConfig::from_lookup(lookup_from(&[("APP_VERSION", "")])).unwrap();

        assert_eq!(config.version, "");
    }

    #[test]
    fn test_port_tolerates_surrounding_whitespace() {
        let config = ServiceConfig::from_lookup(lookup_from(&[("PORT", " 6000 ")])).unwrap();

        assert_eq!(config.port, 6000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        for raw in ["", "http", "70000", "-1"] {
            let result = ServiceConfig::from_lookup(lookup_from(&[("PORT", raw)]));

            assert!(
                matches!(result, Err(ConfigError::InvalidPort(ref v)) if v == raw),
                "PORT={raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_bind_addr_listens_on_all_interfaces() {
        let config = ServiceConfig {
            port: 5123,
            ..ServiceConfig::default()
        };

        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:5123");
    }
}
