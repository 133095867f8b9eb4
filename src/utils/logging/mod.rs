//! Logging setup
//!
//! All diagnostics go through `tracing` and are written to stderr, leaving
//! stdout for the API responses the jobs print.


use clap::ValueEnum;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise `default_level`.
/// Returns whether this call installed the subscriber. A second call leaves
/// the first subscriber in place and returns `false`.
pub fn init_logging(format: LogFormat, default_level: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    match installed {
        Ok(()) => true,
        Err(e) => {
            debug!("Keeping existing tracing subscriber: {}", e);
            false
        }
    }
}

/// Mask a bearer token for display, keeping the first and last four characters
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }

    let start: String = chars[..4].iter().collect();
    let end: String = chars[chars.len() - 4..].iter().collect();
    let middle = "*".repeat(chars.len() - 8);

    format!("{}{}{}", start, middle, end)
}
