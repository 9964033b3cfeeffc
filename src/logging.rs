use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber.
///
/// Diagnostics are opt-in through `RUST_LOG`; without it nothing is logged.
/// A subscriber that is already installed is kept.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
