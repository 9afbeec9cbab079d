// Runtime configuration
//
// Priority, highest first:
// 1. Command-line flags
// 2. Config file (dude-monster.json)
// 3. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::game::background::BackgroundConfig;
use crate::game::characters::CharacterStats;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "dude-monster", about = "Animated sprite demo")]
pub struct Args {
    /// Config file to read
    #[arg(long, default_value = "dude-monster.json")]
    pub config: PathBuf,

    /// Override the sprite directory
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Override the window width
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the window height
    #[arg(long)]
    pub height: Option<u32>,

    /// Write the effective config to the --config path and exit
    #[arg(long)]
    pub write_config: bool,
}

/// Whole application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub assets: AssetConfig,

    #[serde(default)]
    pub background: BackgroundConfig,

    #[serde(default)]
    pub character: CharacterStats,
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_title")]
    pub title: String,

    #[serde(default = "default_window_width")]
    pub width: u32,

    #[serde(default = "default_window_height")]
    pub height: u32,
}

/// Where sprite images live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Directory holding the background and sprite sheets
    #[serde(default = "default_assets_root")]
    pub root: PathBuf,

    /// Sheet file prefix, e.g. `Dude_Monster` for `Dude_Monster_Idle_4.png`
    #[serde(default = "default_sheet_prefix")]
    pub sheet_prefix: String,
}

fn default_window_title() -> String {
    "Dude Monster".to_string()
}

fn default_window_width() -> u32 {
    800
}

fn default_window_height() -> u32 {
    600
}

fn default_assets_root() -> PathBuf {
    PathBuf::from("assets/sprites")
}

fn default_sheet_prefix() -> String {
    "Dude_Monster".to_string()
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_window_title(),
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: default_assets_root(),
            sheet_prefix: default_sheet_prefix(),
        }
    }
}

impl DemoConfig {
    /// Load the config file
    ///
    /// A missing or unreadable file falls back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("No config file at {}, using defaults", path.display());
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load the file named by `args` and apply its overrides
    pub fn from_args(args: &Args) -> Self {
        let mut config = Self::load(&args.config);
        config.apply_args(args);
        config
    }

    /// Command-line flags win over the file
    pub fn apply_args(&mut self, args: &Args) {
        if let Some(root) = &args.assets {
            self.assets.root = root.clone();
        }
        if let Some(width) = args.width {
            self.window.width = width;
        }
        if let Some(height) = args.height {
            self.window.height = height;
        }
    }

    /// Write the config as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }

        let stats = &self.character;
        if stats.min_x >= stats.max_x {
            return Err(ConfigError::Invalid(format!(
                "character.min_x ({}) must be below character.max_x ({})",
                stats.min_x, stats.max_x
            )));
        }
        if stats.move_speed < 0.0 || stats.run_multiplier < 0.0 {
            return Err(ConfigError::Invalid(
                "character speeds must not be negative".to_string(),
            ));
        }
        if stats.width <= 0.0 || stats.height <= 0.0 {
            return Err(ConfigError::Invalid(
                "character size must be positive".to_string(),
            ));
        }
        if stats.hurt_duration < 0.0 {
            return Err(ConfigError::Invalid(
                "character.hurt_duration must not be negative".to_string(),
            ));
        }
        if self.background.repeat_x <= 0.0 {
            return Err(ConfigError::Invalid(
                "background.repeat_x must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
