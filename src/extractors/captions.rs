use serde::{Deserialize, Serialize};

use super::{extract_json_block, VideoId};
use crate::{Result, TranscriptError};

/// Key introducing the captions object in the watch page's player response
pub const CAPTIONS_MARKER: &str = "\"captions\":";

/// Field following the captions object, used as its end boundary
pub const VIDEO_DETAILS_MARKER: &str = ",\"videoDetails";

/// Present on the CAPTCHA interstitial served to rate-limited clients
pub const RECAPTCHA_MARKER: &str = "class=\"g-recaptcha\"";

/// Present on every watch page of a playable or restricted video
pub const PLAYABILITY_MARKER: &str = "\"playabilityStatus\":";

/// One available caption track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptionTrack {
    #[serde(rename = "baseUrl", default)]
    pub base_url: String,

    #[serde(rename = "languageCode", default)]
    pub language_code: String,
}

/// Caption tracks listed on a watch page, in page order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaptionsDocument {
    pub tracks: Vec<CaptionTrack>,
}

impl CaptionsDocument {
    /// Language codes of every track, in page order
    pub fn language_codes(&self) -> Vec<String> {
        self.tracks
            .iter()
            .map(|track| track.language_code.clone())
            .collect()
    }

    /// First track whose language code matches exactly
    pub fn find_language(&self, lang: &str) -> Option<&CaptionTrack> {
        self.tracks.iter().find(|track| track.language_code == lang)
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawCaptions {
    #[serde(rename = "playerCaptionsTracklistRenderer", default)]
    renderer: TracklistRenderer,
}

#[derive(Debug, Default, Deserialize)]
struct TracklistRenderer {
    #[serde(rename = "captionTracks", default)]
    caption_tracks: Vec<CaptionTrack>,
}

/// Decode the captions metadata embedded in a watch page
///
/// A block that fails to decode is reported as disabled transcripts, the same
/// as a page without any captions block.
pub fn parse_captions(page: &str, video_id: &VideoId) -> Result<CaptionsDocument> {
    let block = match extract_json_block(page, CAPTIONS_MARKER, VIDEO_DETAILS_MARKER) {
        Some(block) => block,
        None => return Err(classify_page_error(page, video_id)),
    };

    let raw: RawCaptions = serde_json::from_str(&block).map_err(|err| {
        tracing::debug!("Failed to decode captions block for {}: {}", video_id, err);
        TranscriptError::transcripts_disabled(video_id.as_str())
    })?;

    let document = CaptionsDocument {
        tracks: raw.renderer.caption_tracks,
    };

    if document.is_empty() {
        return Err(TranscriptError::no_transcript(video_id.as_str()));
    }

    tracing::debug!(
        "Found {} caption track(s) for {}: {:?}",
        document.tracks.len(),
        video_id,
        document.language_codes()
    );

    Ok(document)
}

/// Classify a watch page that has no captions block
///
/// A CAPTCHA page wins over every other signal since nothing else on it can be
/// trusted.
pub fn classify_page_error(page: &str, video_id: &VideoId) -> TranscriptError {
    if page.contains(RECAPTCHA_MARKER) {
        TranscriptError::RateLimited
    } else if !page.contains(PLAYABILITY_MARKER) {
        TranscriptError::video_unavailable(video_id.as_str())
    } else {
        TranscriptError::transcripts_disabled(video_id.as_str())
    }
}
