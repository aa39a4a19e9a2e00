use super::messages::macros::{enable_debug_mode, is_debug_mode};
use tracing_subscriber::EnvFilter;

/// Installs the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` in debug mode and
/// `warn` in normal mode. Calling it twice is harmless.
pub fn init_tracing(debug: bool) {
    if debug {
        enable_debug_mode();
    }
    let level = if is_debug_mode() { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
