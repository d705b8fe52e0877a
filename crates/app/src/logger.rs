use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr so they stay out of the game transcript.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}
