//! Session core for TubeChat.
//!
//! Provides:
//! - YouTube video id extraction
//! - The session controller (video-load vs. chat phase state machine)
//! - The conversation manager (message log, pending-answer gate)
//! - An HTTP client for the ingestion and question-answering backend
//! - Mapping of backend failures into user-facing transcript text

pub mod backend;
pub mod failure;
pub mod session;
pub mod video_id;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tubechat_common::{Message, TubechatError};

pub use backend::{HttpBackend, HttpBackendConfig};
pub use failure::{describe_failure, FailureAction};
pub use session::{
    ConversationManager, Phase, RequestState, SessionController, SessionSnapshot,
};
pub use video_id::{extract_video_id, VideoId, VIDEO_ID_LEN};

/// The two backend calls the session layer depends on.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Ask the backend to fetch and index the transcript of `video_link`.
    async fn process_video(&self, video_link: &str) -> Result<IngestSummary, BackendError>;

    /// Ask a question about the indexed video.
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, BackendError>;
}

/// Success body of the ingestion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestSummary {
    pub chunk_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_length: Option<u64>,
}

/// Body of a question-answering request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub message_history: Vec<Message>,
}

/// Success body of the question-answering endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevant_chunks_count: Option<u64>,
}

/// Failure of a backend call. The display text is the user-facing cause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("{0}")]
    Transport(String),
    #[error("HTTP error! status: {status}")]
    Status {
        status: u16,
        detail: Option<String>,
    },
    #[error("{0}")]
    Decode(String),
    #[error("Unknown error")]
    Unknown,
}

/// Rejections of a video submission. Nothing is sent to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Please enter a valid YouTube URL")]
    EmptyUrl,
    #[error("Please enter a valid YouTube URL")]
    InvalidUrl,
    #[error("A video is already being processed")]
    IngestionInFlight,
    #[error("A video is already loaded; start a new session first")]
    SessionActive,
}

impl From<BackendError> for TubechatError {
    fn from(err: BackendError) -> Self {
        TubechatError::Backend(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_like_http_error() {
        let err = BackendError::Status {
            status: 500,
            detail: Some("Error processing video: boom".into()),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn session_error_messages_are_user_facing() {
        assert_eq!(
            SessionError::InvalidUrl.to_string(),
            "Please enter a valid YouTube URL"
        );
        assert_eq!(
            SessionError::EmptyUrl.to_string(),
            "Please enter a valid YouTube URL"
        );
    }

    #[test]
    fn errors_convert_into_umbrella_error() {
        let err: TubechatError = BackendError::Transport("connection refused".into()).into();
        assert!(matches!(err, TubechatError::Backend(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn ingest_summary_accepts_full_backend_body() {
        let json = r#"{
            "message": "Video processed successfully",
            "video_id": "dQw4w9WgXcQ",
            "chunk_count": 42,
            "text_length": 9001
        }"#;
        let summary: IngestSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.chunk_count, 42);
        assert_eq!(summary.video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(summary.text_length, Some(9001));
    }

    #[test]
    fn ingest_summary_requires_chunk_count() {
        let result: Result<IngestSummary, _> = serde_json::from_str(r#"{"message": "ok"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn ask_response_accepts_minimal_body() {
        let response: AskResponse = serde_json::from_str(r#"{"answer": "It is about Rust."}"#).unwrap();
        assert_eq!(response.answer, "It is about Rust.");
        assert_eq!(response.relevant_chunks_count, None);
    }

    #[test]
    fn ask_request_wire_shape() {
        let request = AskRequest {
            question: "What is this about?".into(),
            message_history: vec![Message::user("What is this about?")],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["question"], "What is this about?");
        assert_eq!(json["message_history"][0]["sender"], "user");
    }
}
