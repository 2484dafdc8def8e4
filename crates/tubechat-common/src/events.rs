use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::Message;

/// State-change notifications published by the session layer for views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    /// `Some(id)` when a video session started, `None` after a reset.
    PhaseChanged { video_id: Option<String> },
    ProcessingChanged(bool),
    /// The whole transcript was replaced (seeded or cleared).
    MessagesReplaced(Vec<Message>),
    MessageAppended(Message),
    PendingAnswerChanged(bool),
    ValidationFailed(String),
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::ProcessingChanged(true));

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, Event::ProcessingChanged(true)));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::PhaseChanged { video_id: None });

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, Event::PhaseChanged { video_id: None }));
        assert!(matches!(e2, Event::PhaseChanged { video_id: None }));
    }

    #[tokio::test]
    async fn message_events_keep_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::MessageAppended(Message::user("question")));
        bus.publish(Event::PendingAnswerChanged(true));
        bus.publish(Event::MessageAppended(Message::assistant("answer")));
        bus.publish(Event::PendingAnswerChanged(false));

        let e1 = rx.recv().await.unwrap();
        assert!(matches!(e1, Event::MessageAppended(ref m) if m.text() == "question"));
        let e2 = rx.recv().await.unwrap();
        assert!(matches!(e2, Event::PendingAnswerChanged(true)));
        let e3 = rx.recv().await.unwrap();
        assert!(matches!(e3, Event::MessageAppended(ref m) if m.text() == "answer"));
        let e4 = rx.recv().await.unwrap();
        assert!(matches!(e4, Event::PendingAnswerChanged(false)));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        let count = bus.publish(Event::ProcessingChanged(false));
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();

        let count = bus.publish(Event::MessagesReplaced(Vec::new()));
        assert_eq!(count, 2);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(matches!(event, Event::Unknown));
    }
}
