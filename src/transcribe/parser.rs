use once_cell::sync::Lazy;
use regex::Regex;

use super::TranscriptSegment;
use crate::{Result, TranscriptError};

/// Matches one timed-text element, capturing start, duration and text
static TIMED_TEXT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<text start="([^"]*)" dur="([^"]*)">([^<]*)</text>"#)
        .expect("Invalid timed-text regex")
});

/// Parse a timed-text payload into segments, in document order
///
/// Text is kept verbatim: entities such as `&amp;#39;` are not decoded.
/// Segments are labelled with `requested_lang` when given, else `default_lang`.
/// `source` names the track in the error when nothing matches.
pub fn parse_timed_text(
    payload: &str,
    requested_lang: Option<&str>,
    default_lang: &str,
    source: &str,
) -> Result<Vec<TranscriptSegment>> {
    let lang = requested_lang.unwrap_or(default_lang);

    let segments: Vec<TranscriptSegment> = TIMED_TEXT_REGEX
        .captures_iter(payload)
        .map(|caps| TranscriptSegment {
            text: caps[3].to_string(),
            offset: parse_seconds(&caps[1]),
            duration: parse_seconds(&caps[2]),
            lang: lang.to_string(),
        })
        .collect();

    if segments.is_empty() {
        return Err(TranscriptError::no_transcript(source));
    }

    Ok(segments)
}

/// Seconds as f64; anything unparseable or non-finite becomes 0
fn parse_seconds(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite())
        .unwrap_or(0.0)
}
