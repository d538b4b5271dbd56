//! Console logging initialization.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

/// Parses a level name, defaulting to `INFO`.
pub fn parse_level(level: &str) -> Level {
    level.trim().parse().unwrap_or(Level::INFO)
}

/// Routes `tracing` output to the browser console.
///
/// # Arguments
///
/// * `level` - Log level (trace, debug, info, warn, error)
pub fn init_logging(level: &str) {
    let max_level = parse_level(level);
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(max_level)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);

    tracing::info!(level = %max_level, "Logging initialized");
}
