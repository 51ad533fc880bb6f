//! Configuration file support for touchpad-controls.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/touchpad-controls/config.toml`. Settings cover overlay colours,
//! icon search paths, the menu tap delivery strategy and input housekeeping.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::PolicyKind;
pub use types::{IconsConfig, InputConfig, MenuConfig, OverlayConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [overlay]
/// visible = true
/// border_thickness = 2
/// game_pressed_color = [130, 8, 248, 153]
///
/// [icons]
/// search_paths = ["/usr/share/touchpad-controls/icons", "."]
///
/// [menu]
/// policy = "tap-commit"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Overlay appearance
    #[serde(default)]
    pub overlay: OverlayConfig,

    /// Icon lookup
    #[serde(default)]
    pub icons: IconsConfig,

    /// Menu tap delivery
    #[serde(default)]
    pub menu: MenuConfig,

    /// Pointer input housekeeping
    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `overlay.border_thickness`: 1 - 8
    /// - `menu.queue_capacity`: 1 - 64
    /// - `menu.*_ms`: at most 5000
    /// - `input.stale_event_drain_limit`: 1 - 4096
    fn validate_and_clamp(&mut self) {
        if !(1..=8).contains(&self.overlay.border_thickness) {
            log::warn!(
                "Invalid border_thickness {}, clamping to 1-8 range",
                self.overlay.border_thickness
            );
            self.overlay.border_thickness = self.overlay.border_thickness.clamp(1, 8);
        }

        if !(1..=64).contains(&self.menu.queue_capacity) {
            log::warn!(
                "Invalid queue_capacity {}, clamping to 1-64 range",
                self.menu.queue_capacity
            );
            self.menu.queue_capacity = self.menu.queue_capacity.clamp(1, 64);
        }

        for (name, value) in [
            ("min_hold_ms", &mut self.menu.min_hold_ms),
            ("debounce_ms", &mut self.menu.debounce_ms),
            ("sync_poll_active_ms", &mut self.menu.sync_poll_active_ms),
        ] {
            if *value > 5000 {
                log::warn!("Invalid {name} {value}, clamping to 5000");
                *value = 5000;
            }
        }

        if !(1..=4096).contains(&self.input.stale_event_drain_limit) {
            log::warn!(
                "Invalid stale_event_drain_limit {}, clamping to 1-4096 range",
                self.input.stale_event_drain_limit
            );
            self.input.stale_event_drain_limit = self.input.stale_event_drain_limit.clamp(1, 4096);
        }

        if self.icons.search_paths.is_empty() {
            log::warn!("No icon search paths configured, falling back to current directory");
            self.icons.search_paths.push(PathBuf::from("."));
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("touchpad-controls");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses configuration from a TOML string and clamps it.
    pub fn from_toml(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Saves the current configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
