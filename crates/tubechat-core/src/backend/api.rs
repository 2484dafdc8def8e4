//! BackendClient trait implementation for HttpBackend.

use async_trait::async_trait;
use tracing::debug;

use crate::{AskRequest, AskResponse, BackendClient, BackendError, IngestSummary};

use super::client::{HttpBackend, ASK_PATH, PROCESS_VIDEO_PATH};

#[async_trait]
impl BackendClient for HttpBackend {
    async fn process_video(&self, video_link: &str) -> Result<IngestSummary, BackendError> {
        let url = self.endpoint(PROCESS_VIDEO_PATH);
        debug!(%url, "process-video request");

        let response = self
            .http
            .post(&url)
            .query(&[("video_link", video_link)])
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let response = Self::check_status(response).await?;

        response
            .json::<IngestSummary>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, BackendError> {
        let url = self.endpoint(ASK_PATH);
        debug!(%url, history = request.message_history.len(), "ask request");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let response = Self::check_status(response).await?;

        response
            .json::<AskResponse>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}
