const BOX_TOP: &str = "╭─────────────── YouTube Transcript Error ───────────────╮";
const BOX_SPACER: &str = "│                                                        │";
const BOX_BOTTOM: &str = "╰────────────────────────────────────────────────────────╯";

/// Render an error message inside the fixed-width decorative box
///
/// Continuation lines are indented to line up with the first one.
pub fn format_error_message(message: &str) -> String {
    let aligned = message.replace('\n', "\n  ");

    format!(
        "{}\n{}\n  {}\n{}\n{}",
        BOX_TOP, BOX_SPACER, aligned, BOX_SPACER, BOX_BOTTOM
    )
}

/// Format duration in human-readable format
pub fn format_duration(seconds: f64) -> String {
    let total_seconds = seconds.max(0.0) as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Format an offset as `[hh:]mm:ss` for inline text timestamps
pub fn format_clock(seconds: f64) -> String {
    let total_seconds = seconds.max(0.0) as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Format an offset as `hh:mm:ss<sep>mmm` for subtitle cues
///
/// SRT uses `,` as the millisecond separator, WebVTT uses `.`.
pub fn format_cue_timestamp(seconds: f64, separator: char) -> String {
    let total_millis = (seconds.max(0.0) * 1000.0).round() as u64;
    let hours = total_millis / 3_600_000;
    let minutes = (total_millis % 3_600_000) / 60_000;
    let secs = (total_millis % 60_000) / 1000;
    let millis = total_millis % 1000;

    format!(
        "{:02}:{:02}:{:02}{}{:03}",
        hours, minutes, secs, separator, millis
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_message_box() {
        let formatted = format_error_message("Test error message");

        assert!(formatted.starts_with(BOX_TOP));
        assert!(formatted.contains("  Test error message"));
        assert!(formatted.ends_with(BOX_BOTTOM));
    }

    #[test]
    fn test_format_error_message_empty() {
        let formatted = format_error_message("");

        assert!(formatted.contains(BOX_TOP));
        assert!(formatted.contains(BOX_BOTTOM));
        assert_eq!(formatted.lines().count(), 5);
    }

    #[test]
    fn test_format_error_message_multiline() {
        let formatted = format_error_message("Line 1\nLine 2");

        assert!(formatted.contains("  Line 1\n  Line 2"));
        assert_eq!(formatted.lines().count(), 6);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(30.0), "30s");
        assert_eq!(format_duration(90.0), "1m 30s");
        assert_eq!(format_duration(3661.0), "1h 1m 1s");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.5), "00:00");
        assert_eq!(format_clock(75.9), "01:15");
        assert_eq!(format_clock(3725.0), "01:02:05");
    }

    #[test]
    fn test_format_cue_timestamp() {
        assert_eq!(format_cue_timestamp(0.5, ','), "00:00:00,500");
        assert_eq!(format_cue_timestamp(3723.004, '.'), "01:02:03.004");
        assert_eq!(format_cue_timestamp(-1.0, ','), "00:00:00,000");
    }
}
