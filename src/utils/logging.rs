use log::LevelFilter;

/// Install the global logger at a fixed informational level
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .init();
}
