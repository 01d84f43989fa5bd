//! Pure extraction stages: video ID resolution, captions metadata and track selection.

pub mod captions;
pub mod tracks;
pub mod video_id;

pub use captions::{parse_captions, CaptionTrack, CaptionsDocument};
pub use tracks::{select_track, SelectedTrack};
pub use video_id::{resolve_video_id, VideoId};

/// Extract the block between the first `start` marker and the following `end` marker
///
/// Returns `None` when `start` is absent. When `end` is absent the block runs to the
/// end of `text`. Newlines are stripped from the result.
pub fn extract_json_block(text: &str, start: &str, end: &str) -> Option<String> {
    let (_, rest) = text.split_once(start)?;
    let block = rest.split_once(end).map_or(rest, |(block, _)| block);

    Some(block.replace('\n', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_between_markers() {
        let text = r#"var x = {"captions":{"a":1},"videoDetails":{}}"#;
        assert_eq!(
            extract_json_block(text, r#""captions":"#, r#","videoDetails"#).as_deref(),
            Some(r#"{"a":1}"#)
        );
    }

    #[test]
    fn test_missing_start_marker() {
        assert_eq!(extract_json_block("no markers here", "<start>", "<end>"), None);
    }

    #[test]
    fn test_missing_end_marker_runs_to_end() {
        assert_eq!(
            extract_json_block("head<start>tail", "<start>", "<end>").as_deref(),
            Some("tail")
        );
    }

    #[test]
    fn test_newlines_are_stripped() {
        assert_eq!(
            extract_json_block("<start>{\n\"a\":\n1}<end>", "<start>", "<end>").as_deref(),
            Some("{\"a\":1}")
        );
    }

    #[test]
    fn test_uses_first_start_marker() {
        assert_eq!(
            extract_json_block("<start>one<end><start>two<end>", "<start>", "<end>").as_deref(),
            Some("one")
        );
    }
}
