use std::path::{Path, PathBuf};
use std::str::FromStr;

use alloy_primitives::U256;
use serde::Deserialize;
use thiserror::Error;

use crate::types::config::sink::SinkConfig;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.json";

/// Overrides the configured game contract address.
pub const GAME_ENV_VAR: &str = "GAME";
/// Overrides the configured start block.
pub const START_ENV_VAR: &str = "START";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid game address '{0}'")]
    InvalidAddress(String),

    #[error("Invalid start block '{0}'")]
    InvalidStartBlock(String),

    #[error("channel_capacity must be greater than zero")]
    ZeroChannelCapacity,
}

#[derive(Debug, Deserialize)]
pub struct IndexerConfigRaw {
    pub game_address: String,
    #[serde(default)]
    pub start_block: u64,
    pub blocks_path: PathBuf,
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
    #[serde(default)]
    pub sink: SinkConfig,
}

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Clone)]
pub struct IndexerConfig {
    /// Only events emitted by this contract are indexed
    pub game_address: U256,
    pub start_block: u64,
    /// JSON-lines block archive, relative to the working directory
    pub blocks_path: PathBuf,
    pub channel_capacity: usize,
    pub sink: SinkConfig,
}

impl IndexerConfig {
    /// Load from `path`, applying `GAME` and `START` from the environment.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: IndexerConfigRaw =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Self::resolve(raw, |var| std::env::var(var).ok())
    }

    /// Validate a raw config. `env` looks up override variables.
    pub fn resolve(
        mut raw: IndexerConfigRaw,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(game) = env(GAME_ENV_VAR) {
            raw.game_address = game;
        }
        if let Some(start) = env(START_ENV_VAR) {
            raw.start_block = start
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidStartBlock(start.clone()))?;
        }

        let game_address = parse_address(&raw.game_address)?;

        if raw.channel_capacity == 0 {
            return Err(ConfigError::ZeroChannelCapacity);
        }

        Ok(Self {
            game_address,
            start_block: raw.start_block,
            blocks_path: raw.blocks_path,
            channel_capacity: raw.channel_capacity,
            sink: raw.sink,
        })
    }
}

/// Parse a felt address, hex with `0x` or decimal.
pub fn parse_address(raw: &str) -> Result<U256, ConfigError> {
    U256::from_str(raw.trim()).map_err(|_| ConfigError::InvalidAddress(raw.to_string()))
}
