use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs the global logger once. `level` comes from the script config and is
/// applied before `RUST_LOG`, so the environment still has the final word.
pub fn initialize_logger(level: Option<&str>) {
    let level = level
        .and_then(|raw| raw.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(level)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed by an embedding binary or test harness.
        let _ = builder.try_init();
    });
}
