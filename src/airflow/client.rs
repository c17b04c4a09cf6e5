//! Thin JSON client for the Airflow REST API.

use reqwest::{Method, Url};
use serde_json::Value;
use std::sync::Arc;

use crate::types::{AirflowConfig, ApiVersion, Error, Result};

/// Shared Airflow API client. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct AirflowClient {
    inner: Arc<ClientInner>,
}

#[derive(Debug)]
struct ClientInner {
    http: reqwest::Client,
    base_url: Url,
    config: AirflowConfig,
}

/// A fully resolved Airflow request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path segments below the API root, already substituted.
    pub segments: Vec<String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl AirflowClient {
    pub fn new(config: AirflowConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url())
            .map_err(|e| Error::config(format!("invalid Airflow host '{}': {}", config.host, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "Airflow host '{}' cannot be used as a base URL",
                config.host
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("airflow-mcp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                config,
            }),
        })
    }

    pub fn api_version(&self) -> ApiVersion {
        self.inner.config.api_version
    }

    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Build the URL for `segments`, percent-encoding each one.
    pub fn url_for(&self, segments: &[String]) -> Result<Url> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::config("Airflow base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(segments.iter().map(String::as_str));
        Ok(url)
    }

    /// Send a request and decode the JSON response.
    ///
    /// Empty bodies (e.g. `204 No Content`) become `{"status": <code>}`.
    pub async fn send(&self, request: ApiRequest) -> Result<Value> {
        let url = self.url_for(&request.segments)?;
        tracing::debug!(method = %request.method, url = %url, "Airflow request");

        let mut builder = self
            .inner
            .http
            .request(request.method.clone(), url)
            .header(reqwest::header::ACCEPT, "application/json");
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        builder = self.authorize(builder);

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = error_detail(&text).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });
            tracing::warn!(status = status.as_u16(), %message, "Airflow request failed");
            return Err(Error::airflow(status.as_u16(), message));
        }

        if text.trim().is_empty() {
            return Ok(serde_json::json!({ "status": status.as_u16() }));
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let config = &self.inner.config;
        if let Some(token) = &config.jwt_token {
            builder.bearer_auth(token)
        } else if let Some(username) = &config.username {
            builder.basic_auth(username, config.password.as_deref())
        } else {
            builder
        }
    }
}

/// Longest raw body kept as an error message.
const MAX_DETAIL_CHARS: usize = 512;

/// Pull a human-readable message out of an Airflow error body.
///
/// Problem-details fields win; anything else (proxy HTML pages, plain text)
/// is passed through trimmed and truncated.
fn error_detail(body: &str) -> Option<String> {
    let structured = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        ["detail", "title", "message"]
            .iter()
            .find_map(|key| value.get(*key).and_then(Value::as_str))
            .map(str::to_string)
    });
    structured.or_else(|| {
        let trimmed = body.trim();
        (!trimmed.is_empty()).then(|| trimmed.chars().take(MAX_DETAIL_CHARS).collect())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(host: &str) -> AirflowClient {
        AirflowClient::new(AirflowConfig {
            host: host.to_string(),
            ..AirflowConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_url_for_encodes_segments() {
        let client = client("http://localhost:8080");
        let url = client
            .url_for(&[
                "datasets".to_string(),
                "s3://bucket/key with space".to_string(),
            ])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/v1/datasets/s3:%2F%2Fbucket%2Fkey%20with%20space"
        );
    }

    #[test]
    fn test_url_for_host_with_prefix() {
        let client = client("https://example.com/airflow/");
        let url = client.url_for(&["dags".to_string()]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/airflow/api/v1/dags");
    }

    #[test]
    fn test_invalid_host_rejected() {
        let result = AirflowClient::new(AirflowConfig {
            host: "not a url".to_string(),
            ..AirflowConfig::default()
        });
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_error_detail_prefers_detail_field() {
        let body = r#"{"detail": "DAG with dag_id: 'x' not found", "status": 404, "title": "DAG not found"}"#;
        assert_eq!(
            error_detail(body).as_deref(),
            Some("DAG with dag_id: 'x' not found")
        );
    }

    #[test]
    fn test_error_detail_falls_back_to_body() {
        assert_eq!(error_detail(r#"{"oops": 1}"#).as_deref(), Some(r#"{"oops": 1}"#));
        assert_eq!(
            error_detail("  <html><body>502 Bad Gateway</body></html>\n").as_deref(),
            Some("<html><body>502 Bad Gateway</body></html>")
        );
        assert_eq!(error_detail("   "), None);
    }

    #[test]
    fn test_error_detail_truncates_long_bodies() {
        let body = "x".repeat(MAX_DETAIL_CHARS * 2);
        assert_eq!(error_detail(&body).map(|d| d.len()), Some(MAX_DETAIL_CHARS));
    }
}
