use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::toml_config::LogFormat;

fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    let directive = match (verbose, level) {
        (true, _) => "feedback_insights=debug,info".to_string(),
        (false, Some(level)) => format!("feedback_insights={}", level),
        (false, None) => "feedback_insights=info".to_string(),
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Installs the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init_logger(verbose: bool, level: Option<&str>, format: LogFormat) {
    let filter = default_filter(verbose, level);
    let registry = tracing_subscriber::registry().with(filter);

    // Logs go to stderr so query output on stdout stays machine-readable.
    let result = match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("logger already initialized: {}", e);
    }
}
