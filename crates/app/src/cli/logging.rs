//! Logging configuration and subscriber initialisation.

use clap::Args;
use tracing_subscriber::{
    EnvFilter, Registry,
    layer::{Layer, SubscriberExt},
    util::{SubscriberInitExt, TryInitError},
};

/// Log output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub(crate) struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, env = "RUST_LOG", default_value = "warn")]
    pub(crate) log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        global = true,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact
    )]
    pub(crate) log_format: LogFormat,
}

impl LoggingConfig {
    pub(crate) fn init(&self) -> Result<(), TryInitError> {
        match self.log_format {
            LogFormat::Compact => self.init_with_layer(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            ),
            LogFormat::Json => self.init_with_layer(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            ),
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(format!("{},sqlx=warn", self.log_level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    }

    fn init_with_layer<L>(&self, fmt_layer: L) -> Result<(), TryInitError>
    where
        L: Layer<Registry> + Send + Sync + 'static,
    {
        tracing_subscriber::registry()
            .with(fmt_layer)
            .with(self.env_filter())
            .try_init()
    }
}
