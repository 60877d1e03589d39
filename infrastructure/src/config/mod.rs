//! Configuration file loading for verdict-arena
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ARENA_`-prefixed environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./arena.toml` or `./.arena.toml`
//! 4. Global: `$XDG_CONFIG_HOME/verdict-arena/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileArenaConfig, FileAuditConfig, FileConfig, FileConsensusConfig,
    FileOracleConfig, FileStorageConfig, FileTopicConfig, Severity,
};
pub use loader::ConfigLoader;
