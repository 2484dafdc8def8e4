//! HTTP client for the ingestion and question-answering backend.
//!
//! - `POST {base}/process-video?video_link=<url>` → `{ chunk_count }`
//! - `POST {base}/ask` with `{ question, message_history }` → `{ answer }`

mod api;
mod client;
mod config;

pub use client::HttpBackend;
pub use config::HttpBackendConfig;
