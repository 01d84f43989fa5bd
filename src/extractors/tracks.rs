use super::{CaptionsDocument, VideoId};
use crate::{Result, TranscriptError};

/// The track chosen for download
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedTrack {
    /// Timed-text URL of the track
    pub url: String,

    /// Language code of the track, used to label segments when no language was requested
    pub language_code: String,
}

/// Pick a caption track by language
///
/// With a language, the first track whose code matches it exactly is chosen.
/// Without one, the first track is chosen.
pub fn select_track(
    captions: &CaptionsDocument,
    lang: Option<&str>,
    video_id: &VideoId,
) -> Result<SelectedTrack> {
    let track = match lang {
        Some(lang) => match captions.find_language(lang) {
            Some(track) => Some(track),
            None => {
                return Err(TranscriptError::LanguageNotFound {
                    lang: lang.to_string(),
                    available_langs: captions.language_codes(),
                    video_id: video_id.to_string(),
                })
            }
        },
        None => captions.tracks.first(),
    };

    let track = track.ok_or_else(|| TranscriptError::no_transcript(video_id.as_str()))?;

    tracing::debug!(
        "Selected {} track for {}",
        track.language_code,
        video_id
    );

    Ok(SelectedTrack {
        url: track.base_url.clone(),
        language_code: track.language_code.clone(),
    })
}
