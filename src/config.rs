//! Per-session configuration
//!
//! Chosen once when a session is created and never changed afterwards.
//! Physics constants are not configurable; they live in `crate::consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::STARTING_LIVES;

/// What ends a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPolicy {
    /// Touching the level's star clears it immediately
    #[default]
    AdvanceOnPickup,
    /// The star grants a temporary speed boost; the level clears once every
    /// coin is collected and every enemy stomped
    ClearAll,
}

impl CompletionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionPolicy::AdvanceOnPickup => "advance_on_pickup",
            CompletionPolicy::ClearAll => "clear_all",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "advance_on_pickup" | "advance" | "star" => Some(CompletionPolicy::AdvanceOnPickup),
            "clear_all" | "clear" => Some(CompletionPolicy::ClearAll),
            _ => None,
        }
    }
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Level completion rule
    pub completion: CompletionPolicy,
    /// Lives at the start of the run
    pub starting_lives: u32,
    /// Seed for the demo autopilot
    pub autopilot_seed: u64,
    /// Frame cap for headless runs (0 = no cap)
    pub max_frames: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            completion: CompletionPolicy::AdvanceOnPickup,
            starting_lives: STARTING_LIVES,
            autopilot_seed: 12345,
            // Five minutes at 60 Hz
            max_frames: 5 * 60 * 60,
        }
    }
}

impl SessionConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load from a JSON file, falling back to defaults if it can't be read
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded session config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Invalid config {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Can't read config {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
