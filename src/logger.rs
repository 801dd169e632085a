use env_logger::Env;

/// Map the verbosity flag onto a default log filter. Anything set through
/// RUST_LOG takes precedence.
pub fn setup_logging(verbosity: u8) {
    let level: &str = match verbosity {
        0 => "off",
        1 => "error",
        2 => "warn",
        3 => "info",
        4 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
