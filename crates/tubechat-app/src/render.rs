//! Prints session events to the terminal.

use std::io::Write;

use chrono::Local;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::warn;
use tubechat_common::{Event, Message, Sender};
use tubechat_config::EmbedConfig;
use tubechat_core::Phase;

/// Drain `events` until the session's bus is dropped.
pub(crate) async fn render_events(mut events: broadcast::Receiver<Event>, embed: EmbedConfig) {
    loop {
        match events.recv().await {
            Ok(event) => {
                if let Some(text) = render(&event, &embed) {
                    println!("{text}");
                }
            }
            Err(RecvError::Lagged(skipped)) => warn!(skipped, "renderer fell behind"),
            Err(RecvError::Closed) => break,
        }
    }
}

/// Terminal text for one event, or `None` when nothing should be shown.
///
/// User messages are not echoed since the user just typed them.
pub(crate) fn render(event: &Event, embed: &EmbedConfig) -> Option<String> {
    match event {
        Event::PhaseChanged { video_id: Some(id) } => Some(format!(
            "\n== YouTube Video ==\nVideo ID: {id}\nPlayer:   {}\n",
            embed.url_for(id)
        )),
        Event::PhaseChanged { video_id: None } => {
            Some("\nEnter a YouTube video URL to get started.".to_string())
        }
        Event::ProcessingChanged(true) => Some(
            "Processing video... extracting the transcript and creating embeddings.".to_string(),
        ),
        Event::ProcessingChanged(false) => None,
        Event::MessagesReplaced(messages) => {
            let lines: Vec<String> = messages
                .iter()
                .filter(|m| m.sender() == Sender::Assistant)
                .map(format_message)
                .collect();
            (!lines.is_empty()).then(|| lines.join("\n"))
        }
        Event::MessageAppended(message) if message.sender() == Sender::Assistant => {
            Some(format_message(message))
        }
        Event::MessageAppended(_) => None,
        Event::PendingAnswerChanged(true) => Some("  ...".to_string()),
        Event::PendingAnswerChanged(false) => None,
        Event::ValidationFailed(reason) => Some(format!("! {reason}")),
        Event::Unknown => None,
    }
}

pub(crate) fn format_message(message: &Message) -> String {
    let who = match message.sender() {
        Sender::User => "you",
        Sender::Assistant => "assistant",
    };
    let time = message.timestamp().with_timezone(&Local).format("%H:%M:%S");
    format!("[{time}] {who}: {}", message.text())
}

pub(crate) fn banner() {
    println!("TubeChat v{}", env!("CARGO_PKG_VERSION"));
    println!("Type /reset to load another video, /quit to exit.");
}

pub(crate) fn prompt(phase: &Phase) {
    let label = if phase.is_chatting() { "ask" } else { "video url" };
    print!("{label}> ");
    let _ = std::io::stdout().flush();
}
