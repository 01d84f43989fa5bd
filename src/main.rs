use anyhow::Result;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yt_transcript::cli::{Cli, Commands, OutputFormat};
use yt_transcript::config::{Config, ProxyConfig};
use yt_transcript::extractors::resolve_video_id;
use yt_transcript::utils::format_duration;
use yt_transcript::{output, TranscriptError, YoutubeTranscript};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_filter = if verbose {
        "yt_transcript=debug"
    } else if quiet {
        "yt_transcript=warn"
    } else {
        "yt_transcript=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<TranscriptError>() {
        Some(transcript_err) if !transcript_err.is_transport() => {
            eprintln!("{}", style(transcript_err).for_stderr().red());
        }
        _ => eprintln!("{} {:#}", style("error:").for_stderr().red().bold(), err),
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Fetch {
            video,
            lang,
            proxy,
            proxy_user,
            proxy_pass,
            format,
            output,
            timestamps,
            timeout,
        } => {
            let video_id = resolve_video_id(&video)?;
            let config = Config::load(cli.config.as_deref())?;

            // flags take precedence over the config file
            let mut request = config.transcript_config();
            if lang.is_some() {
                request.language = lang;
            }
            if let Some(host) = proxy {
                let mut proxy = ProxyConfig::new(host);
                if let Some(user) = proxy_user {
                    proxy = proxy.with_auth(user, proxy_pass.unwrap_or_default());
                }
                request.proxy = Some(proxy);
            }
            if let Some(secs) = timeout {
                request.timeout = Some(Duration::from_secs(secs));
            }
            let format = format.unwrap_or(config.default_output_format);

            let spinner = spinner(cli.quiet, &format!("Fetching transcript for {}...", video_id))?;

            let result = YoutubeTranscript::new(request).fetch(video_id.as_str()).await;
            spinner.finish_and_clear();
            let segments = result?;

            let total = segments.last().map(|s| s.end()).unwrap_or(0.0);
            tracing::info!(
                "Fetched {} segments covering {}",
                segments.len(),
                format_duration(total)
            );

            write_output(&segments, video_id.as_str(), output, format, timestamps)?;
        }
        Commands::Id { video } => {
            println!("{}", resolve_video_id(&video)?);
        }
        Commands::Config { show, init } => {
            let path = match cli.config {
                Some(path) => path,
                None => Config::config_path()?,
            };

            if init {
                Config::default().save_to(&path)?;
                println!("Configuration written to: {}", path.display());
            } else {
                let config = if path.exists() {
                    Config::load_from(&path)?
                } else {
                    Config::default()
                };
                config.display();
                if !show {
                    println!();
                    println!("Edit the config file to change these settings:");
                    println!("  {}", path.display());
                }
            }
        }
    }

    Ok(())
}

fn spinner(quiet: bool, message: &str) -> Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }

    let progress = ProgressBar::new_spinner();
    progress.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    progress.set_message(message.to_string());
    progress.enable_steady_tick(Duration::from_millis(120));

    Ok(progress)
}

fn write_output(
    segments: &[yt_transcript::TranscriptSegment],
    video_id: &str,
    path: Option<PathBuf>,
    format: OutputFormat,
    timestamps: bool,
) -> Result<()> {
    match path {
        Some(path) => {
            output::save_to_file(segments, video_id, &path, format, timestamps)?;
            println!("Transcript saved to: {}", path.display());
        }
        None => {
            output::print_to_console(segments, video_id, format, timestamps)?;
        }
    }

    Ok(())
}
