//! Session and conversation state.
//!
//! A `SessionController` owns the top-level phase and the video id, and
//! drives a `ConversationManager` that owns the message log. Every
//! transition publishes an [`Event`](tubechat_common::Event) so a view
//! can re-render.

mod controller;
mod conversation;
mod types;


pub use controller::SessionController;
pub use conversation::ConversationManager;
pub use types::{Phase, RequestState, SessionSnapshot};
