pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ConfigError, TubechatError};
pub use events::{Event, EventBus};
pub use id::{new_correlation_id, new_id, MessageId};
pub use types::{Message, Sender};

pub type Result<T> = std::result::Result<T, TubechatError>;
