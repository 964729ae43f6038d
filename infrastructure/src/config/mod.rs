//! Configuration file loading for ordersnap
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./ordersnap.toml` or `./.ordersnap.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/ordersnap/config.toml`
//! 4. Fallback: `~/.config/ordersnap/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBatchConfig, FileConfig, FileLatencyConfig, FileOutputConfig,
    FileSimulationConfig,
};
pub use loader::{ConfigError, ConfigLoader};
