use tracing_subscriber::EnvFilter;

/// Initialise the global `tracing` subscriber for the CLI.
///
/// Respects `RUST_LOG`; falls back to `warn` so degraded steps and failed
/// rollbacks are visible without drowning the progress output. Logs go to
/// stderr without timestamps.
///
/// Call this once, at the very start of `main`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
