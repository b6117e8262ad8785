use bevy_log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// How closed enumerations (line style, line mode, polygon mode) are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumEncoding {
    /// String tags such as `"solid"` (what the mission editor writes)
    #[default]
    Names,
    /// 0-based ordinals in declaration order
    Ordinals,
}

/// Knobs for the drawing encoder. Decoding accepts every form regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireOptions {
    #[serde(default)]
    pub enum_encoding: EnumEncoding,

    /// Write colors as `0xRRGGBBAA` rather than bare `RRGGBBAA`
    #[serde(default = "default_color_prefix")]
    pub color_prefix: bool,
}

fn default_color_prefix() -> bool {
    true
}

impl Default for WireOptions {
    fn default() -> Self {
        Self {
            enum_encoding: EnumEncoding::Names,
            color_prefix: true,
        }
    }
}

/// Codec configuration persisted to disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodecConfig {
    #[serde(default)]
    pub wire: WireOptions,
}

/// Result of loading config from disk
pub struct LoadConfigResult {
    pub config: CodecConfig,
    pub config_path: PathBuf,
    /// Set when an existing file could not be used and defaults were substituted
    pub reset_reason: Option<String>,
}

/// Load configuration from `config_path`, falling back to defaults
pub fn load_config(config_path: &Path) -> LoadConfigResult {
    let (config, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    info!("Loaded config from {:?}", config_path);
                    (config, None)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        CodecConfig::default(),
                        Some(format!("Configuration file was corrupted: {}", e)),
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    CodecConfig::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (CodecConfig::default(), None)
    };

    LoadConfigResult {
        config,
        config_path: config_path.to_path_buf(),
        reset_reason,
    }
}

/// Save configuration to disk as pretty JSON
pub fn save_config(config: &CodecConfig, config_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(config_path, json)?;
    info!("Config saved to {:?}", config_path);
    Ok(())
}
