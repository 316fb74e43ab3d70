//! # Configuration Management Module
//!
//! Centralized, serde-backed configuration for Squirrel Haven.
//!
//! ## Configuration Structure
//!
//! - [`HavenConfig`] - community name, invite link, player display name
//! - [`CareConfig`] - starting squirrel and decay timer
//! - [`GamesConfig`] - mini-game clock and spawn tuning
//! - [`TextConfig`] - location of the localized text document
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use squirrelhaven::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     println!("Community: {}", config.haven.name);
//!     Config::create_default("config.example.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [haven]
//! name = "Squirrel Community"
//! invite_url = "https://discord.com/invite/UGUjdgD5Mb"
//! player_name = "You"
//!
//! [care]
//! squirrel_name = "Nutkin"
//! decay_interval_secs = 30
//!
//! [games]
//! tick_ms = 1000
//! nut_catch_secs = 30
//! ```
//!
//! Every section is optional; missing sections fall back to defaults.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HavenConfig {
    pub name: String,
    pub invite_url: String,
    /// Display name used for the local player's posts and notes.
    pub player_name: String,
}

impl Default for HavenConfig {
    fn default() -> Self {
        Self {
            name: "Squirrel Community".to_string(),
            invite_url: "https://discord.com/invite/UGUjdgD5Mb".to_string(),
            player_name: "You".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CareConfig {
    pub squirrel_name: String,
    pub starting_nuts: u32,
    pub starting_coins: u32,
    /// Seconds between decay ticks.
    pub decay_interval_secs: u64,
}

impl Default for CareConfig {
    fn default() -> Self {
        Self {
            squirrel_name: "Nutkin".to_string(),
            starting_nuts: 5,
            starting_coins: 50,
            decay_interval_secs: 30,
        }
    }
}

impl CareConfig {
    pub fn decay_interval(&self) -> Duration {
        Duration::from_secs(self.decay_interval_secs)
    }
}

/// Mini-game tuning. Durations are counted in game ticks of `tick_ms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GamesConfig {
    pub tick_ms: u64,
    pub nut_catch_secs: u32,
    pub quick_click_secs: u32,
    pub memory_secs: u32,
    /// Chance per tick that a new nut starts falling.
    pub nut_spawn_chance: f64,
    /// Chance per tick that a new click target appears.
    pub target_spawn_chance: f64,
    /// Ticks a click target stays up before vanishing.
    pub target_lifetime_ticks: u32,
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            nut_catch_secs: 30,
            quick_click_secs: 15,
            memory_secs: 60,
            nut_spawn_chance: 0.3,
            target_spawn_chance: 0.6,
            target_lifetime_ticks: 3,
        }
    }
}

impl GamesConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub path: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            path: "data/text.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: Some("squirrelhaven.log".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub haven: HavenConfig,
    #[serde(default)]
    pub care: CareConfig,
    #[serde(default)]
    pub games: GamesConfig,
    #[serde(default)]
    pub text: TextConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    /// Reject values that would stall the timers or break spawn rolls.
    pub fn validate(&self) -> Result<()> {
        if self.care.decay_interval_secs == 0 {
            return Err(anyhow!("care.decay_interval_secs must be greater than 0"));
        }
        if self.games.tick_ms == 0 {
            return Err(anyhow!("games.tick_ms must be greater than 0"));
        }
        for (name, chance) in [
            ("games.nut_spawn_chance", self.games.nut_spawn_chance),
            ("games.target_spawn_chance", self.games.target_spawn_chance),
        ] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(anyhow!("{} must be within 0.0..=1.0 (got {})", name, chance));
            }
        }
        for (name, secs) in [
            ("games.nut_catch_secs", self.games.nut_catch_secs),
            ("games.quick_click_secs", self.games.quick_click_secs),
            ("games.memory_secs", self.games.memory_secs),
        ] {
            if secs == 0 {
                return Err(anyhow!("{} must be greater than 0", name));
            }
        }
        if self.care.squirrel_name.trim().is_empty() {
            return Err(anyhow!("care.squirrel_name must not be empty"));
        }
        Ok(())
    }
}
