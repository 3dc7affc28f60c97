use tracing_subscriber::{fmt, EnvFilter};

/// Log filter for a `-v` count; `None` keeps the configured level.
pub fn verbosity_filter(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over everything; otherwise `-v` flags, then the
/// configured level. Stdout stays reserved for command output.
///
/// Returns false when a subscriber was already installed; the first one stays.
pub fn init_logging(config_level: &str, verbose: u8) -> bool {
    let level = verbosity_filter(verbose).unwrap_or(config_level);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
