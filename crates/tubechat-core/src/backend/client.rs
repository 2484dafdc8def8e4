//! HTTP backend client struct, endpoint building and error-body parsing.

use tracing::warn;

use crate::BackendError;

use super::config::HttpBackendConfig;

pub(crate) const PROCESS_VIDEO_PATH: &str = "process-video";
pub(crate) const ASK_PATH: &str = "ask";

/// Talks to the backend over HTTP.
pub struct HttpBackend {
    pub(crate) config: HttpBackendConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: HttpBackendConfig) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder().connect_timeout(config.connect_timeout);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| BackendError::Transport(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &HttpBackendConfig {
        &self.config
    }

    /// Absolute URL of an endpoint under the configured base.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Turn a non-success response into `BackendError::Status`, keeping the
    /// backend's `detail` text for the log.
    pub(crate) async fn check_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = parse_error_detail(&body);
        warn!(
            status = status.as_u16(),
            detail = detail.as_deref().unwrap_or(""),
            "backend returned an error status"
        );
        Err(BackendError::Status {
            status: status.as_u16(),
            detail,
        })
    }
}

/// Pull `detail` out of an error body like `{"detail": "..."}`.
pub(crate) fn parse_error_detail(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    match &json["detail"] {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}
