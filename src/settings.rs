//! Game settings and tuning
//!
//! Persisted as JSON next to the binary. Missing fields fall back to defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::WanderError;
use crate::sim::{Bounds, LocomotionConfig, WandererConfig};

/// Which hazard to spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    #[default]
    LaserPointer,
    WanderingBox,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::LaserPointer => "laser_pointer",
            Preset::WanderingBox => "wandering_box",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "laser_pointer" | "laser" => Some(Preset::LaserPointer),
            "wandering_box" | "box" => Some(Preset::WanderingBox),
            _ => None,
        }
    }

    /// Hazard tuning for this preset
    pub fn wanderer(&self) -> WandererConfig {
        match self {
            Preset::LaserPointer => WandererConfig::laser_pointer(),
            Preset::WanderingBox => WandererConfig::wandering_box(),
        }
    }
}

/// Everything needed to start a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for reproducible runs
    pub seed: u64,
    /// Hazard spawn point (world units)
    pub start_position: Vec2,
    /// Hazard tuning
    pub wanderer: WandererConfig,
    /// Player tuning
    pub player: LocomotionConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl Settings {
    /// Create settings from a preset
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            seed: 0x1a5e_7c47,
            start_position: Vec2::ZERO,
            wanderer: preset.wanderer(),
            player: LocomotionConfig::default(),
        }
    }

    /// Check every tunable, returning the hazard's resolved bounds
    pub fn validate(&self) -> Result<Bounds, WanderError> {
        self.player.validate()?;
        Ok(self.wanderer.validate(self.start_position)?)
    }

    pub fn from_json(json: &str) -> Result<Self, WanderError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, WanderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WanderError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), WanderError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
