use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global tracing subscriber, logging to stderr with the given
/// `env_filter` directives (e.g. `warn,token_exchange=debug`).
pub fn initialize(env_filter: &str) {
    fmt()
        .with_env_filter(EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .init();
}
