//! yt-transcript - fetch YouTube caption tracks as timed transcript segments
//!
//! This library resolves a video ID from a URL, scrapes the watch page for the
//! embedded captions metadata, picks a caption track by language and parses the
//! timed-text payload into [`TranscriptSegment`]s.
//!
//! ```no_run
//! # async fn run() -> yt_transcript::Result<()> {
//! use yt_transcript::{fetch_transcript, TranscriptConfig};
//!
//! let config = TranscriptConfig::default().with_language("en");
//! let segments = fetch_transcript("https://youtu.be/dQw4w9WgXcQ", Some(config)).await?;
//! for segment in segments {
//!     println!("[{:.2}] {}", segment.offset, segment.text);
//! }
//! # Ok(())
//! # }
//! ```

use std::fmt;

pub mod cli;
pub mod config;
pub mod extractors;
pub mod http;
pub mod output;
pub mod transcribe;
pub mod utils;

pub use cli::{Cli, Commands, OutputFormat};
pub use config::{Config, ProxyAuth, ProxyConfig, TranscriptConfig};
pub use extractors::{CaptionTrack, CaptionsDocument, SelectedTrack, VideoId};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use transcribe::{fetch_transcript, TranscriptSegment, YoutubeTranscript};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, TranscriptError>;

/// Boxed error produced by custom [`HttpClient`] implementations
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error types specific to transcript fetching
///
/// Every variant except the two transport ones renders as a boxed, multi-line
/// message through [`utils::format_error_message`]. Transport failures are passed
/// through unchanged.
#[derive(thiserror::Error, Debug)]
pub enum TranscriptError {
    /// The input matched neither a bare ID nor a known URL shape
    InvalidVideoId,

    /// The watch page served a CAPTCHA challenge
    RateLimited,

    /// The video was removed, made private or never existed
    VideoUnavailable { video_id: String },

    /// The video is playable but carries no usable captions block
    TranscriptsDisabled { video_id: String },

    /// No track could be fetched or parsed
    NoTranscript { video_id: String },

    /// The requested language is not among the available tracks
    LanguageNotFound {
        lang: String,
        available_langs: Vec<String>,
        video_id: String,
    },

    /// Transport failure from the default reqwest client
    Http(#[from] reqwest::Error),

    /// Transport failure from a caller-supplied client
    Transport(#[source] BoxError),
}

impl TranscriptError {
    /// Plain message without the decorative box
    pub fn message(&self) -> String {
        match self {
            Self::InvalidVideoId => {
                "Could not extract YouTube video ID from the provided string".to_string()
            }
            Self::RateLimited => "⚠️  Rate Limit Exceeded\n\
                 \n\
                 YouTube is receiving too many requests from this IP.\n\
                 Please try again later or use a different IP address."
                .to_string(),
            Self::VideoUnavailable { video_id } => format!(
                "🚫  Video Unavailable\n\
                 \n\
                 The video \"{}\" is no longer available.\n\
                 It may have been removed or set to private.",
                video_id
            ),
            Self::TranscriptsDisabled { video_id } => format!(
                "❌  Transcripts Disabled\n\
                 \n\
                 Transcripts are disabled for video \"{}\".\n\
                 The video owner has not enabled transcripts for this content.",
                video_id
            ),
            Self::NoTranscript { video_id } => format!(
                "📝  No Transcripts Available\n\
                 \n\
                 No transcripts were found for video \"{}\".\n\
                 This video may not have any transcripts generated yet.",
                video_id
            ),
            Self::LanguageNotFound {
                lang,
                available_langs,
                video_id,
            } => {
                let bullets = available_langs
                    .iter()
                    .map(|code| format!("  • {}", code))
                    .collect::<Vec<_>>()
                    .join("\n");
                format!(
                    "🌐  Language Not Available\n\
                     \n\
                     Transcripts in \"{}\" are not available for video \"{}\".\n\
                     \n\
                     Available languages:\n{}",
                    lang, video_id, bullets
                )
            }
            Self::Http(err) => err.to_string(),
            Self::Transport(err) => err.to_string(),
        }
    }

    /// Video ID (or track URL) the error refers to, when it carries one
    pub fn video_id(&self) -> Option<&str> {
        match self {
            Self::VideoUnavailable { video_id }
            | Self::TranscriptsDisabled { video_id }
            | Self::NoTranscript { video_id }
            | Self::LanguageNotFound { video_id, .. } => Some(video_id),
            _ => None,
        }
    }

    /// Whether this is a network-level failure rather than a classified one
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Transport(_))
    }

    pub(crate) fn video_unavailable(video_id: impl Into<String>) -> Self {
        Self::VideoUnavailable {
            video_id: video_id.into(),
        }
    }

    pub(crate) fn transcripts_disabled(video_id: impl Into<String>) -> Self {
        Self::TranscriptsDisabled {
            video_id: video_id.into(),
        }
    }

    pub(crate) fn no_transcript(video_id: impl Into<String>) -> Self {
        Self::NoTranscript {
            video_id: video_id.into(),
        }
    }
}

impl fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(err) => fmt::Display::fmt(err, f),
            Self::Transport(err) => fmt::Display::fmt(err, f),
            _ => f.write_str(&utils::format_error_message(&self.message())),
        }
    }
}
