//! Configuration structures.
//!
//! Configuration is loaded from CLI flags with environment-variable fallbacks
//! (see `src/main.rs`); every field has a default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::Error;

/// Default MCP listening port for network transports.
pub const DEFAULT_PORT: u16 = 8000;
/// Default MCP bind address for network transports.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default Airflow webserver URL.
pub const DEFAULT_AIRFLOW_HOST: &str = "http://localhost:8080";

/// Global server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// MCP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Airflow REST API connection.
    #[serde(default)]
    pub airflow: AirflowConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Transport selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Stdio,
    Sse,
    Http,
}

impl Transport {
    pub const ALL: [Transport; 3] = [Transport::Stdio, Transport::Sse, Transport::Http];

    pub fn as_str(self) -> &'static str {
        match self {
            Transport::Stdio => "stdio",
            Transport::Sse => "sse",
            Transport::Http => "http",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transport {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Transport::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::config(format!("unknown transport: {}", s)))
    }
}

#[cfg(feature = "cli")]
impl clap::ValueEnum for Transport {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

/// MCP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for `sse` / `http` transports.
    pub host: String,

    /// Listening port for `sse` / `http` transports.
    pub port: u16,

    /// Requested transport, before normalization.
    pub transport: Transport,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            transport: Transport::default(),
        }
    }
}

/// Airflow REST API version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    /// Airflow 2.x stable REST API.
    #[default]
    V1,
    /// Airflow 3.x public API.
    V2,
}

impl ApiVersion {
    pub const ALL: [ApiVersion; 2] = [ApiVersion::V1, ApiVersion::V2];

    pub fn as_str(self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
            ApiVersion::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "cli")]
impl clap::ValueEnum for ApiVersion {
    fn value_variants<'a>() -> &'a [Self] {
        &Self::ALL
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

/// Airflow connection configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct AirflowConfig {
    /// Webserver base URL, without the `/api/...` suffix.
    pub host: String,

    pub api_version: ApiVersion,

    /// Basic auth user (ignored when `jwt_token` is set).
    pub username: Option<String>,

    pub password: Option<String>,

    /// Bearer token, takes precedence over basic auth.
    pub jwt_token: Option<String>,

    /// Per-request timeout.
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl AirflowConfig {
    /// REST API root, e.g. `http://localhost:8080/api/v1`.
    pub fn api_base_url(&self) -> String {
        format!(
            "{}/api/{}",
            self.host.trim_end_matches('/'),
            self.api_version.as_str()
        )
    }
}

impl Default for AirflowConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_AIRFLOW_HOST.to_string(),
            api_version: ApiVersion::default(),
            username: None,
            password: None,
            jwt_token: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

// Credentials stay out of logs.
impl fmt::Debug for AirflowConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AirflowConfig")
            .field("host", &self.host)
            .field("api_version", &self.api_version)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("jwt_token", &self.jwt_token.as_ref().map(|_| "***"))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Tracing log level used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.transport, Transport::Stdio);
        assert_eq!(config.airflow.api_base_url(), "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_api_base_url_trims_trailing_slash() {
        let config = AirflowConfig {
            host: "https://airflow.example.com/".to_string(),
            api_version: ApiVersion::V2,
            ..AirflowConfig::default()
        };
        assert_eq!(config.api_base_url(), "https://airflow.example.com/api/v2");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: Config = serde_json::from_value(serde_json::json!({
            "server": { "host": "0.0.0.0", "port": 9000, "transport": "http" },
            "airflow": {
                "host": "http://airflow:8080",
                "api_version": "v1",
                "username": "admin",
                "password": "admin",
                "jwt_token": null,
                "request_timeout": "45s"
            }
        }))
        .unwrap();

        assert_eq!(config.server.transport, Transport::Http);
        assert_eq!(config.airflow.request_timeout, Duration::from_secs(45));
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let config = AirflowConfig {
            password: Some("hunter2".to_string()),
            jwt_token: Some("eyJhbGciOi".to_string()),
            ..AirflowConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("eyJhbGciOi"));
    }

    #[test]
    fn test_transport_from_str() {
        assert_eq!("http".parse::<Transport>().unwrap(), Transport::Http);
        assert!("websocket".parse::<Transport>().is_err());
    }
}
