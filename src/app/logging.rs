//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the `tracing` filter directive.
pub(crate) const ENV_LOG: &str = "AED_LOG";

/// Install the global stderr subscriber.
///
/// Interactive sessions default to `off` so log lines never land on top of
/// the full-screen view; set `AED_LOG` to opt back in.
pub(crate) fn init(interactive: bool) {
    let filter = EnvFilter::try_from_env(ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(interactive)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(interactive: bool) -> &'static str {
    if interactive {
        "off"
    } else {
        "warn"
    }
}
