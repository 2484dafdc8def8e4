//! Conversation log and the question-answering round trip.

use std::sync::Arc;

use tracing::{debug, warn};
use tubechat_common::{new_correlation_id, Event, EventBus, Message};

use crate::failure::{describe_failure, FailureAction};
use crate::{AskRequest, AskResponse, BackendClient, BackendError, VideoId};

use super::types::RequestState;

/// Ordered message log plus the gate for the outstanding question.
pub struct ConversationManager {
    messages: Vec<Message>,
    /// Draft text not yet submitted.
    input: String,
    answer: RequestState,
    events: Arc<EventBus>,
}

impl ConversationManager {
    pub fn new(events: Arc<EventBus>) -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            answer: RequestState::Idle,
            events,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_pending(&self) -> bool {
        self.answer.is_pending()
    }

    pub fn answer_state(&self) -> RequestState {
        self.answer
    }

    /// Replace the whole log with a single message.
    pub(crate) fn seed(&mut self, message: Message) {
        self.messages = vec![message];
        self.events
            .publish(Event::MessagesReplaced(self.messages.clone()));
    }

    /// Drop the log, the draft and the answer gate.
    pub(crate) fn clear(&mut self) {
        self.messages.clear();
        self.input.clear();
        let was_pending = self.answer.is_pending();
        self.answer.reset();
        self.events.publish(Event::MessagesReplaced(Vec::new()));
        if was_pending {
            self.events.publish(Event::PendingAnswerChanged(false));
        }
    }

    /// Accept a question: append it, clear the draft, mark the answer
    /// pending and build the request.
    ///
    /// Returns `None` without touching anything when the text is blank, no
    /// video is loaded, or an answer is already pending.
    pub fn begin_question(
        &mut self,
        text: &str,
        video_id: Option<&VideoId>,
    ) -> Option<AskRequest> {
        if text.trim().is_empty() {
            return None;
        }
        let Some(video_id) = video_id else {
            debug!("ignoring question: no video loaded");
            return None;
        };
        if !self.answer.begin() {
            debug!(%video_id, "ignoring question: answer already pending");
            return None;
        }

        let message = Message::user(text);
        self.messages.push(message.clone());
        self.input.clear();
        self.events.publish(Event::MessageAppended(message));
        self.events.publish(Event::PendingAnswerChanged(true));

        Some(AskRequest {
            question: text.to_string(),
            message_history: self.messages.clone(),
        })
    }

    /// Record the outcome of the outstanding question as one assistant
    /// message and release the gate.
    ///
    /// Outcomes arriving with no question outstanding (e.g. after a reset)
    /// are dropped.
    pub fn finish_question(
        &mut self,
        outcome: Result<AskResponse, BackendError>,
    ) -> Option<&Message> {
        if !self.answer.is_pending() {
            debug!("dropping answer: no question outstanding");
            return None;
        }

        let text = match outcome {
            Ok(response) => response.answer,
            Err(e) => {
                warn!(error = %e, "question answering failed");
                describe_failure(FailureAction::GettingResponse, &e)
            }
        };

        let message = Message::assistant(text);
        self.messages.push(message.clone());
        self.answer.settle();
        self.events.publish(Event::MessageAppended(message));
        self.events.publish(Event::PendingAnswerChanged(false));
        self.messages.last()
    }

    /// Ask `text` and wait for the reply. Returns the assistant message
    /// appended for this question, or `None` if the question was ignored.
    pub async fn submit_question(
        &mut self,
        client: &dyn BackendClient,
        text: &str,
        video_id: Option<&VideoId>,
    ) -> Option<&Message> {
        let request = self.begin_question(text, video_id)?;

        let request_id = new_correlation_id();
        debug!(
            %request_id,
            history = request.message_history.len(),
            "asking backend"
        );
        let outcome = client.ask(&request).await;
        debug!(%request_id, ok = outcome.is_ok(), "backend answered");

        self.finish_question(outcome)
    }

    /// Submit the current draft.
    pub async fn submit_input(
        &mut self,
        client: &dyn BackendClient,
        video_id: Option<&VideoId>,
    ) -> Option<&Message> {
        let text = self.input.clone();
        self.submit_question(client, &text, video_id).await
    }
}
