//! Video-load vs. chat phase state machine.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use tubechat_common::{new_correlation_id, Event, EventBus, Message};

use crate::failure::{describe_failure, FailureAction};
use crate::video_id::extract_video_id;
use crate::{
    AskRequest, AskResponse, BackendClient, BackendError, IngestSummary, SessionError, VideoId,
};

use super::conversation::ConversationManager;
use super::types::{Phase, RequestState, SessionSnapshot};

/// Owns the session phase, the ingestion gate and the conversation.
pub struct SessionController {
    phase: Phase,
    ingestion: RequestState,
    conversation: ConversationManager,
    events: Arc<EventBus>,
}

impl SessionController {
    pub fn new() -> Self {
        Self::with_event_bus(Arc::new(EventBus::default()))
    }

    pub fn with_event_bus(events: Arc<EventBus>) -> Self {
        Self {
            phase: Phase::AwaitingVideo,
            ingestion: RequestState::Idle,
            conversation: ConversationManager::new(Arc::clone(&events)),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn video_id(&self) -> Option<&VideoId> {
        self.phase.video_id()
    }

    pub fn is_processing(&self) -> bool {
        self.ingestion.is_pending()
    }

    pub fn conversation(&self) -> &ConversationManager {
        &self.conversation
    }

    pub fn conversation_mut(&mut self) -> &mut ConversationManager {
        &mut self.conversation
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            video_id: self.video_id().map(|id| id.as_str().to_string()),
            is_processing: self.is_processing(),
            pending_answer: self.conversation.is_pending(),
            messages: self.conversation.messages().to_vec(),
            input: self.conversation.input().to_string(),
        }
    }

    /// Validate `raw_url`, commit its video id and open the ingestion gate.
    ///
    /// Returns the link to send for ingestion. On error nothing changes
    /// and a `ValidationFailed` event is published.
    pub fn begin_video(&mut self, raw_url: &str) -> Result<String, SessionError> {
        let video_id = match self.validate_video(raw_url) {
            Ok(id) => id,
            Err(e) => {
                self.events.publish(Event::ValidationFailed(e.to_string()));
                return Err(e);
            }
        };

        self.ingestion.begin();
        info!(%video_id, "video session started");
        self.events.publish(Event::PhaseChanged {
            video_id: Some(video_id.as_str().to_string()),
        });
        self.events.publish(Event::ProcessingChanged(true));
        self.phase = Phase::Chatting { video_id };

        Ok(raw_url.to_string())
    }

    fn validate_video(&self, raw_url: &str) -> Result<VideoId, SessionError> {
        if self.ingestion.is_pending() {
            return Err(SessionError::IngestionInFlight);
        }
        if self.phase.is_chatting() {
            return Err(SessionError::SessionActive);
        }
        if raw_url.trim().is_empty() {
            return Err(SessionError::EmptyUrl);
        }
        extract_video_id(raw_url).ok_or(SessionError::InvalidUrl)
    }

    /// Seed the conversation from the ingestion outcome and close the gate.
    ///
    /// The session stays in `Chatting` whether ingestion succeeded or not;
    /// a failure only changes the seeded message. Outcomes arriving after
    /// a reset are dropped.
    pub fn finish_video(&mut self, outcome: Result<IngestSummary, BackendError>) {
        if !self.ingestion.is_pending() {
            debug!("dropping ingestion result: no ingestion outstanding");
            return;
        }

        let text = match outcome {
            Ok(summary) => {
                info!(chunks = summary.chunk_count, "video processed");
                format!(
                    "Video processed successfully! I found {} text chunks from the video. \
                     You can now ask me questions about this YouTube video.",
                    summary.chunk_count
                )
            }
            Err(e) => {
                warn!(error = %e, "video ingestion failed");
                describe_failure(FailureAction::ProcessingVideo, &e)
            }
        };

        self.conversation.seed(Message::assistant(text));
        self.ingestion.settle();
        self.events.publish(Event::ProcessingChanged(false));
    }

    /// Start a session for `raw_url` and wait for ingestion to settle.
    ///
    /// Only validation problems are returned as errors; backend failures
    /// end up in the transcript.
    pub async fn submit_video(
        &mut self,
        client: &dyn BackendClient,
        raw_url: &str,
    ) -> Result<(), SessionError> {
        let link = self.begin_video(raw_url)?;

        let request_id = new_correlation_id();
        debug!(%request_id, %link, "requesting ingestion");
        let outcome = client.process_video(&link).await;
        debug!(%request_id, ok = outcome.is_ok(), "ingestion settled");

        self.finish_video(outcome);
        Ok(())
    }

    /// See [`ConversationManager::begin_question`].
    pub fn begin_question(&mut self, text: &str) -> Option<AskRequest> {
        self.conversation.begin_question(text, self.phase.video_id())
    }

    /// See [`ConversationManager::finish_question`].
    pub fn finish_question(
        &mut self,
        outcome: Result<AskResponse, BackendError>,
    ) -> Option<&Message> {
        self.conversation.finish_question(outcome)
    }

    /// Ask a question about the loaded video.
    pub async fn submit_question(
        &mut self,
        client: &dyn BackendClient,
        text: &str,
    ) -> Option<&Message> {
        self.conversation
            .submit_question(client, text, self.phase.video_id())
            .await
    }

    /// Submit the conversation's draft text.
    pub async fn submit_input(&mut self, client: &dyn BackendClient) -> Option<&Message> {
        self.conversation
            .submit_input(client, self.phase.video_id())
            .await
    }

    /// Return to `AwaitingVideo` with an empty conversation and idle gates.
    pub fn reset(&mut self) {
        let was_processing = self.ingestion.is_pending();
        self.phase = Phase::AwaitingVideo;
        self.ingestion.reset();
        self.conversation.clear();

        info!("session reset");
        self.events.publish(Event::PhaseChanged { video_id: None });
        if was_processing {
            self.events.publish(Event::ProcessingChanged(false));
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}
