use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::transcribe::TranscriptSegment;
use crate::utils::{format_clock, format_cue_timestamp};

/// JSON envelope around the fetched segments
#[derive(Debug, Serialize)]
pub struct TranscriptDocument<'a> {
    pub video_id: &'a str,
    pub language: Option<&'a str>,
    pub fetched_at: DateTime<Utc>,
    pub segments: &'a [TranscriptSegment],
}

/// Plain text, one segment per line
pub fn format_as_text(segments: &[TranscriptSegment], include_timestamps: bool) -> String {
    segments
        .iter()
        .map(|segment| {
            if include_timestamps {
                format!("[{}] {}", format_clock(segment.offset), segment.text)
            } else {
                segment.text.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_as_json(segments: &[TranscriptSegment], video_id: &str) -> Result<String> {
    let document = TranscriptDocument {
        video_id,
        language: segments.first().map(|segment| segment.lang.as_str()),
        fetched_at: Utc::now(),
        segments,
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

pub fn format_as_srt(segments: &[TranscriptSegment]) -> String {
    let mut output = String::new();

    for (index, segment) in segments.iter().enumerate() {
        output.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            index + 1,
            format_cue_timestamp(segment.offset, ','),
            format_cue_timestamp(segment.end(), ','),
            segment.text
        ));
    }

    output
}

pub fn format_as_vtt(segments: &[TranscriptSegment]) -> String {
    let mut output = String::from("WEBVTT\n\n");

    for segment in segments {
        output.push_str(&format!(
            "{} --> {}\n{}\n\n",
            format_cue_timestamp(segment.offset, '.'),
            format_cue_timestamp(segment.end(), '.'),
            segment.text
        ));
    }

    output
}

pub fn format_as_csv(segments: &[TranscriptSegment]) -> String {
    let mut output = String::from("offset,duration,lang,text\n");

    for segment in segments {
        output.push_str(&format!(
            "{:.3},{:.3},{},{}\n",
            segment.offset,
            segment.duration,
            escape_csv(&segment.lang),
            escape_csv(&segment.text)
        ));
    }

    output
}

fn escape_csv(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments() -> Vec<TranscriptSegment> {
        vec![
            TranscriptSegment {
                text: "Hello".to_string(),
                offset: 0.5,
                duration: 2.0,
                lang: "en".to_string(),
            },
            TranscriptSegment {
                text: "World, again".to_string(),
                offset: 62.5,
                duration: 1.25,
                lang: "en".to_string(),
            },
        ]
    }

    #[test]
    fn test_text_with_and_without_timestamps() {
        assert_eq!(format_as_text(&segments(), false), "Hello\nWorld, again");
        assert_eq!(
            format_as_text(&segments(), true),
            "[00:00] Hello\n[01:02] World, again"
        );
    }

    #[test]
    fn test_srt_cues() {
        let srt = format_as_srt(&segments());

        assert!(srt.starts_with("1\n00:00:00,500 --> 00:00:02,500\nHello\n\n"));
        assert!(srt.contains("2\n00:01:02,500 --> 00:01:03,750\nWorld, again\n"));
    }

    #[test]
    fn test_vtt_header_and_cues() {
        let vtt = format_as_vtt(&segments());

        assert!(vtt.starts_with("WEBVTT\n\n00:00:00.500 --> 00:00:02.500\nHello\n"));
    }

    #[test]
    fn test_csv_escapes_commas() {
        let csv = format_as_csv(&segments());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "offset,duration,lang,text");
        assert_eq!(lines[1], "0.500,2.000,en,Hello");
        assert_eq!(lines[2], "62.500,1.250,en,\"World, again\"");
    }

    #[test]
    fn test_json_document() {
        let json = format_as_json(&segments(), "dQw4w9WgXcQ").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["video_id"], "dQw4w9WgXcQ");
        assert_eq!(value["language"], "en");
        assert_eq!(value["segments"][1]["offset"], 62.5);
        assert!(value["fetched_at"].is_string());
    }
}
