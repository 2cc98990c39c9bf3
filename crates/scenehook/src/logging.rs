//! Logging setup for hosts that have no subscriber of their own

use tracing::Level;

use crate::config::PluginConfig;

/// Map a configured level name to a `tracing` level
///
/// Unknown names fall back to `INFO`.
pub fn parse_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install a stderr `fmt` subscriber at `level`
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one keeps receiving events.
pub fn init_logging(level: Level, verbose: bool) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(verbose)
        .with_thread_ids(verbose)
        .with_file(verbose)
        .with_line_number(verbose)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}

/// Install a subscriber from plugin settings
///
/// `debug` forces the `DEBUG` level when the configured level is quieter.
pub fn init_from_config(config: &PluginConfig) -> bool {
    let level = parse_level(&config.log_level);
    let level = if config.debug && level < Level::DEBUG {
        Level::DEBUG
    } else {
        level
    };
    init_logging(level, config.debug)
}
