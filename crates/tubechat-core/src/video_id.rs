//! YouTube video id extraction.
//!
//! Recognizes `watch?v=`, `youtu.be/`, `/v/`, `/u/<x>/`, `/embed/` and
//! `&v=` shapes. The id is whatever follows the last recognized marker up
//! to the next `#`, `&` or `?`, and only counts when it is exactly
//! [`VIDEO_ID_LEN`] characters long.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::SessionError;

pub const VIDEO_ID_LEN: usize = 11;

// The leading greedy `.*` makes the last marker in the input win.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^.*(youtu.be/|v/|u/[A-Za-z0-9_]/|embed/|watch\?v=|&v=)([^#&?]*).*").unwrap()
});

/// An 11-character YouTube video token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VideoId {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        extract_video_id(s).ok_or(SessionError::InvalidUrl)
    }
}

/// Extract the video id from a URL-ish string, or `None` when there is none.
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    let caps = VIDEO_ID_RE.captures(input)?;
    let token = caps.get(2)?.as_str();
    if token.chars().count() != VIDEO_ID_LEN {
        return None;
    }
    Some(VideoId(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    fn extracted(input: &str) -> Option<String> {
        extract_video_id(input).map(|id| id.as_str().to_string())
    }

    #[test]
    fn recognizes_every_url_shape() {
        let urls = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ?version=3",
            "https://www.youtube.com/u/1/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=player_embedded&v=dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ",
        ];
        for url in urls {
            assert_eq!(extracted(url).as_deref(), Some(ID), "url: {url}");
        }
    }

    #[test]
    fn stops_at_query_and_fragment_separators() {
        assert_eq!(
            extracted("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").as_deref(),
            Some(ID)
        );
        assert_eq!(
            extracted("https://youtu.be/dQw4w9WgXcQ?si=abc").as_deref(),
            Some(ID)
        );
        assert_eq!(
            extracted("https://www.youtube.com/watch?v=dQw4w9WgXcQ#t=30").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn rejects_wrong_length_tokens() {
        assert_eq!(extracted("https://www.youtube.com/watch?v=short"), None);
        assert_eq!(extracted("https://youtu.be/dQw4w9WgXcQQ"), None);
        assert_eq!(extracted("https://www.youtube.com/watch?v="), None);
    }

    #[test]
    fn rejects_strings_without_a_marker() {
        assert_eq!(extracted("not a url"), None);
        assert_eq!(extracted(""), None);
        assert_eq!(extracted("https://vimeo.com/123456789"), None);
        assert_eq!(extracted("dQw4w9WgXcQ"), None);
    }

    #[test]
    fn last_marker_wins() {
        assert_eq!(
            extracted("https://youtu.be/aaaaaaaaaaa?list=x&v=dQw4w9WgXcQ").as_deref(),
            Some(ID)
        );
    }

    #[test]
    fn from_str_maps_failure_to_invalid_url() {
        assert_eq!("not a url".parse::<VideoId>(), Err(SessionError::InvalidUrl));
        let id: VideoId = "https://youtu.be/dQw4w9WgXcQ".parse().unwrap();
        assert_eq!(id.to_string(), ID);
    }
}
