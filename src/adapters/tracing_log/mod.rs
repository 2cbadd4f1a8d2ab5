// Tracing log adapter - Structured logging using the tracing crate

use tracing_subscriber::EnvFilter;

use crate::config_initialization::{LogFormat, LogSettings};

/// Build the event filter; `RUST_LOG` wins over the configured level
pub fn build_filter(settings: &LogSettings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level))
}

/// Initialize the global tracing subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber in
/// place. Log lines go to stderr so stdout stays free for results.
pub fn init_tracing(settings: &LogSettings) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(settings))
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match settings.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        let settings = LogSettings::default();
        init_tracing(&settings);
        init_tracing(&LogSettings {
            format: LogFormat::Json,
            ..settings
        });
    }
}
