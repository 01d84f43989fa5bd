use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Result, TranscriptError};

/// Length of a YouTube video ID
pub const VIDEO_ID_LEN: usize = 11;

/// Matches YouTube watch, embed, `/v/`, `/e/` and youtu.be URLs, capturing the ID
static VIDEO_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)(?:youtube\.com/(?:[^/]+/.+/|(?:v|e(?:mbed)?)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#,
    )
    .expect("Invalid video ID regex")
});

/// An 11-character YouTube video ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Resolve a video ID from a bare ID or a YouTube URL
///
/// Any 11-character input is taken as an ID as-is; the character set is not
/// checked. Length is counted in characters, not bytes.
pub fn resolve_video_id(input: &str) -> Result<VideoId> {
    if input.chars().count() == VIDEO_ID_LEN {
        return Ok(VideoId(input.to_string()));
    }

    VIDEO_ID_REGEX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|id| VideoId(id.as_str().to_string()))
        .ok_or(TranscriptError::InvalidVideoId)
}
