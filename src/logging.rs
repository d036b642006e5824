use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

use crate::error::{PlannerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

/// Build the filter: `RUST_LOG` wins, otherwise `level` applies to
/// everything with HTTP plumbing held at `info`.
pub fn env_filter(level: &str) -> EnvFilter {
    std::env::var("RUST_LOG").map_or_else(
        |_| {
            EnvFilter::new(level)
                .add_directive(
                    "hyper=warn"
                        .parse()
                        .unwrap_or_else(|_| tracing::Level::WARN.into()),
                )
                .add_directive(
                    "tower_http=info"
                        .parse()
                        .unwrap_or_else(|_| tracing::Level::INFO.into()),
                )
        },
        EnvFilter::new,
    )
}

/// Install the global tracing subscriber.
pub fn init(level: &str, format: LogFormat) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(level));

    let result = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| PlannerError::Internal(format!("failed to initialize logging: {}", e)))
}
