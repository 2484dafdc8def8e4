//! Session phase, request gates and snapshots.

use serde::Serialize;
use tubechat_common::Message;

use crate::VideoId;

/// Top-level phase. The video id lives inside `Chatting`, so a session has
/// an id exactly when it is chatting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    AwaitingVideo,
    Chatting { video_id: VideoId },
}

impl Phase {
    pub fn video_id(&self) -> Option<&VideoId> {
        match self {
            Phase::AwaitingVideo => None,
            Phase::Chatting { video_id } => Some(video_id),
        }
    }

    pub fn is_chatting(&self) -> bool {
        matches!(self, Phase::Chatting { .. })
    }
}

/// Lifecycle of one kind of backend request. At most one request of a kind
/// is outstanding at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestState {
    #[default]
    Idle,
    Pending,
    Settled,
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    /// Move to `Pending`. Returns `false` (and changes nothing) if a
    /// request is already outstanding.
    pub(crate) fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        *self = RequestState::Pending;
        true
    }

    pub(crate) fn settle(&mut self) {
        *self = RequestState::Settled;
    }

    pub(crate) fn reset(&mut self) {
        *self = RequestState::Idle;
    }
}

/// Point-in-time copy of everything a view renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SessionSnapshot {
    pub video_id: Option<String>,
    pub is_processing: bool,
    pub pending_answer: bool,
    pub messages: Vec<Message>,
    pub input: String,
}

impl SessionSnapshot {
    pub fn is_chatting(&self) -> bool {
        self.video_id.is_some()
    }
}
