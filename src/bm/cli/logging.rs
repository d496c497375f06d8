use tracing::Subscriber;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter (EnvFilter syntax).
pub const LOG_ENV: &str = "BM_LOG";

const TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Builds the stderr log subscriber: `info` by default, `debug` when verbose.
///
/// The caller installs it for the duration of the run with
/// `tracing::subscriber::with_default`.
pub fn subscriber(verbose: bool) -> impl Subscriber + Send + Sync + 'static {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .finish()
}
