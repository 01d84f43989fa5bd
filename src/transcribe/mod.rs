use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::TranscriptConfig;
use crate::extractors::{parse_captions, resolve_video_id, select_track, VideoId};
use crate::http::{self, HttpClient, HttpRequest};
use crate::{Result, TranscriptError};

pub mod parser;

pub use parser::parse_timed_text;

/// Watch page URL, the video ID is appended
const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Individual transcript segment with timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Segment text, verbatim from the timed-text payload
    pub text: String,

    /// Start time in seconds
    pub offset: f64,

    /// Duration in seconds
    pub duration: f64,

    /// Language code of the segment
    pub lang: String,
}

impl TranscriptSegment {
    /// End time in seconds
    pub fn end(&self) -> f64 {
        self.offset + self.duration
    }
}

/// Fetches YouTube transcripts with a fixed set of request options
///
/// Holds no mutable state, so one instance can serve concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct YoutubeTranscript {
    config: TranscriptConfig,
}

impl YoutubeTranscript {
    pub fn new(config: TranscriptConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Fetch the transcript of a video given its ID or URL
    pub async fn fetch(&self, video: &str) -> Result<Vec<TranscriptSegment>> {
        let video_id = resolve_video_id(video)?;
        let lang = self.config.language();

        tracing::info!(
            "Fetching transcript for {} (language: {})",
            video_id,
            lang.unwrap_or("default")
        );

        let page = self.fetch_video_page(&video_id).await?;
        let captions = parse_captions(&page, &video_id)?;
        let track = select_track(&captions, lang, &video_id)?;

        let payload = self.fetch_timed_text(&track.url).await?;
        let segments = parse_timed_text(&payload, lang, &track.language_code, &track.url)?;

        tracing::info!("Parsed {} segments for {}", segments.len(), video_id);

        Ok(segments)
    }

    /// Download the watch page HTML
    ///
    /// The HTTP status is not checked; error pages are classified from their
    /// content.
    pub async fn fetch_video_page(&self, video_id: &VideoId) -> Result<String> {
        let url = format!("{}{}", WATCH_URL, urlencoding::encode(video_id.as_str()));
        tracing::debug!("Fetching watch page: {}", url);

        let response = self
            .client()?
            .fetch(HttpRequest::get(url, self.config.language()))
            .await?;

        tracing::debug!(
            "Watch page returned HTTP {} ({} bytes)",
            response.status,
            response.body.len()
        );

        Ok(response.body)
    }

    /// Download the timed-text payload of a caption track
    pub async fn fetch_timed_text(&self, track_url: &str) -> Result<String> {
        tracing::debug!("Fetching timed text: {}", track_url);

        let response = self
            .client()?
            .fetch(HttpRequest::get(track_url, self.config.language()))
            .await?;

        if !response.is_success() {
            tracing::debug!("Timed text request failed: HTTP {}", response.status);
            return Err(TranscriptError::no_transcript(track_url));
        }

        Ok(response.body)
    }

    /// Caller-supplied client, or a freshly built default one
    fn client(&self) -> Result<Arc<dyn HttpClient>> {
        if let Some(client) = &self.config.http_client {
            return Ok(Arc::clone(client));
        }

        let client = http::build_client(self.config.proxy.as_ref(), self.config.timeout())?;
        Ok(Arc::new(client))
    }
}

/// Fetch the transcript of a video given its ID or URL
pub async fn fetch_transcript(
    video: &str,
    config: Option<TranscriptConfig>,
) -> Result<Vec<TranscriptSegment>> {
    YoutubeTranscript::new(config.unwrap_or_default())
        .fetch(video)
        .await
}
