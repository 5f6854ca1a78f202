//! Diagnostic logging setup for the `appenv` binary.

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable that overrides the verbosity chosen on the command line.
pub const LOG_ENV_VAR: &str = "APPENV_LOG";

pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a stderr subscriber. Safe to call more than once; later calls are ignored.
pub fn init(verbose: u8) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_for_verbosity(verbose).into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}
