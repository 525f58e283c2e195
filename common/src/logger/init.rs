use once_cell::sync::OnceCell;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Output layout of the fmt subscriber.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable, multi-line.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Install the global subscriber. Later calls are no-ops.
///
/// The filter comes from `RUST_LOG` and falls back to `info`.
pub fn init_logger(service_name: &'static str, format: LogFormat) {
    LOGGER_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let base = fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .with_span_events(fmt::format::FmtSpan::CLOSE);

        let installed = match format {
            LogFormat::Json => tracing_subscriber::registry()
                .with(filter)
                .with(base.json())
                .try_init(),
            LogFormat::Pretty => tracing_subscriber::registry()
                .with(filter)
                .with(base.pretty())
                .try_init(),
        };

        // Someone else (a test harness) may already own the global slot.
        if installed.is_ok() {
            tracing::info!(service = service_name, ?format, "logger initialized");
        }
    });
}
