use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "yt-transcript",
    about = "Fetch the caption transcript of a YouTube video",
    version,
    long_about = "Fetches the uploaded or auto-generated caption track of a YouTube video and prints it as text, JSON, SRT, WebVTT or CSV. Accepts a bare video ID or any common YouTube URL."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable progress indicators and informational logs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file (defaults to ./config.yaml or the user config directory)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the transcript of a video
    Fetch {
        /// Video ID or URL (youtube.com/watch?v=, youtu.be/, /embed/, /v/)
        #[arg(value_name = "VIDEO")]
        video: String,

        /// Language code of the caption track (first available track if not specified)
        #[arg(short, long, value_name = "LANG", env = "YT_TRANSCRIPT_LANG")]
        lang: Option<String>,

        /// Proxy server URL (e.g. http://proxy.example.com:8080)
        #[arg(long, value_name = "URL", env = "YT_TRANSCRIPT_PROXY")]
        proxy: Option<String>,

        /// Proxy username
        #[arg(long, value_name = "USER", requires = "proxy")]
        proxy_user: Option<String>,

        /// Proxy password
        #[arg(long, value_name = "PASSWORD", requires = "proxy_user")]
        proxy_pass: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file path (prints to console if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include timestamps in text output (srt/vtt formats always include timestamps)
        #[arg(long)]
        timestamps: bool,

        /// Request timeout in seconds
        #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,
    },

    /// Print the video ID extracted from a URL
    Id {
        /// Video ID or URL
        #[arg(value_name = "VIDEO")]
        video: String,
    },

    /// Show or initialise the configuration file
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,

        /// Write a default configuration file
        #[arg(long, conflicts_with = "show")]
        init: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON with timestamps
    Json,
    /// SRT subtitle format
    Srt,
    /// WebVTT format
    Vtt,
    /// CSV format
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Srt => write!(f, "srt"),
            OutputFormat::Vtt => write!(f, "vtt"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fetch_with_proxy_credentials() {
        let cli = Cli::try_parse_from([
            "yt-transcript",
            "fetch",
            "dQw4w9WgXcQ",
            "--lang",
            "fr",
            "--proxy",
            "http://proxy.example.com:8080",
            "--proxy-user",
            "user",
            "--proxy-pass",
            "pass",
            "-f",
            "srt",
        ])
        .unwrap();

        match cli.command {
            Commands::Fetch {
                video,
                lang,
                proxy,
                proxy_user,
                proxy_pass,
                format,
                ..
            } => {
                assert_eq!(video, "dQw4w9WgXcQ");
                assert_eq!(lang.as_deref(), Some("fr"));
                assert_eq!(proxy.as_deref(), Some("http://proxy.example.com:8080"));
                assert_eq!(proxy_user.as_deref(), Some("user"));
                assert_eq!(proxy_pass.as_deref(), Some("pass"));
                assert_eq!(format, Some(OutputFormat::Srt));
            }
            _ => panic!("expected fetch command"),
        }
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = Cli::try_parse_from(["yt-transcript", "fetch", "dQw4w9WgXcQ", "--timeout", "0"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["yt-transcript", "fetch", "dQw4w9WgXcQ", "--timeout", "5"])
            .unwrap();
        match cli.command {
            Commands::Fetch { timeout, .. } => assert_eq!(timeout, Some(5)),
            _ => panic!("expected fetch command"),
        }
    }

    #[test]
    fn test_proxy_user_requires_proxy() {
        let result = Cli::try_parse_from([
            "yt-transcript",
            "fetch",
            "dQw4w9WgXcQ",
            "--proxy-user",
            "user",
        ]);
        assert!(result.is_err());
    }
}
