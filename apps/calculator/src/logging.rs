//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a run mode and `-v` count.
///
/// The CLI stays quiet unless asked; the server logs requests at `info`.
pub fn default_directive(server: bool, verbose: u8) -> &'static str {
    match (server, verbose) {
        (_, v) if v >= 2 => "trace",
        (_, 1) => "debug",
        (true, _) => "info,tower_http=debug",
        (false, _) => "warn",
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=calc_core=trace` - Show engine events only
/// - Default: see [`default_directive`]
///
/// Logs go to stderr so CLI results on stdout stay clean.
pub fn init_tracing(server: bool, verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(server, verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
