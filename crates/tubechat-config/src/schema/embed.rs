//! Playback embed configuration.

use serde::{Deserialize, Serialize};

/// Address prefix of the video player embed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    pub base_url: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.youtube.com/embed/".into(),
        }
    }
}

impl EmbedConfig {
    /// Embed address for a video id.
    pub fn url_for(&self, video_id: &str) -> String {
        format!("{}/{video_id}", self.base_url.trim_end_matches('/'))
    }
}
