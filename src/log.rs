use log::LevelFilter;

/// Initialize logging for wordrack.
///
/// Defaults to `Info`, or `Debug` when `debug_enabled` is set (the CLI wires
/// this to the `WORDRACK_DEBUG` environment variable). An explicit `RUST_LOG`
/// spec overrides both.
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
    log::debug!("logger initialized at {level:?} level");
}
