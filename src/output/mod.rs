use anyhow::Result;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::transcribe::TranscriptSegment;

pub mod formatters;

pub use formatters::*;

/// Render segments in the requested format
pub fn render(
    segments: &[TranscriptSegment],
    video_id: &str,
    format: OutputFormat,
    include_timestamps: bool,
) -> Result<String> {
    let content = match format {
        OutputFormat::Text => format_as_text(segments, include_timestamps),
        OutputFormat::Json => format_as_json(segments, video_id)?,
        OutputFormat::Srt => format_as_srt(segments),
        OutputFormat::Vtt => format_as_vtt(segments),
        OutputFormat::Csv => format_as_csv(segments),
    };

    Ok(content)
}

/// Save rendered segments to file
pub fn save_to_file(
    segments: &[TranscriptSegment],
    video_id: &str,
    path: &Path,
    format: OutputFormat,
    include_timestamps: bool,
) -> Result<()> {
    let content = render(segments, video_id, format, include_timestamps)?;

    fs_err::write(path, content)?;
    Ok(())
}

/// Print rendered segments to stdout
pub fn print_to_console(
    segments: &[TranscriptSegment],
    video_id: &str,
    format: OutputFormat,
    include_timestamps: bool,
) -> Result<()> {
    let content = render(segments, video_id, format, include_timestamps)?;

    println!("{}", content.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.srt");
        let segments = vec![TranscriptSegment {
            text: "Hello".to_string(),
            offset: 0.0,
            duration: 1.0,
            lang: "en".to_string(),
        }];

        save_to_file(&segments, "dQw4w9WgXcQ", &path, OutputFormat::Srt, false).unwrap();

        let written = fs_err::read_to_string(&path).unwrap();
        assert_eq!(written, "1\n00:00:00,000 --> 00:00:01,000\nHello\n\n");
    }
}
