//! Game settings
//!
//! Read once at startup from a JSON file. Every field has a default, so a
//! partial file only overrides what it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{BACKGROUND_FRAMES, FPS};
use crate::sim::JumpTrigger;

/// Where the sprite sheets and backgrounds live
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    /// Cat sheet (6 x 4 grid)
    pub cat_sheet: PathBuf,
    /// Dog sheet (6 x 4 grid)
    pub dog_sheet: PathBuf,
    /// Slideshow images, shown in order
    pub backgrounds: Vec<PathBuf>,
}

impl Default for AssetPaths {
    fn default() -> Self {
        let dir = Path::new("Imagesidescroller");
        Self {
            cat_sheet: dir.join("Chatanimation.png"),
            dog_sheet: dir.join("Chienanimation.png"),
            backgrounds: (1..=BACKGROUND_FRAMES)
                .map(|i| dir.join(format!("Background ({i}).png")))
                .collect(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub assets: AssetPaths,
    /// Fixed run seed; `None` derives one from the clock
    pub seed: Option<u64>,
    /// Held (re-fires every frame) or pressed (rising edge only)
    pub jump_trigger: JumpTrigger,
    /// Frame limiter target
    pub target_fps: u32,
    /// Window size multiplier over the 960x540 viewport
    pub window_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            assets: AssetPaths::default(),
            seed: None,
            jump_trigger: JumpTrigger::Held,
            target_fps: FPS,
            window_scale: 1.0,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const PATH_ENV: &'static str = "CAT_VS_DOGS_SETTINGS";
    /// Settings file used when the variable is unset
    pub const DEFAULT_PATH: &'static str = "settings.json";

    /// Load settings from the configured path, falling back to defaults
    pub fn load() -> Self {
        let path = std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH));
        Self::load_from(&path)
    }

    /// Load settings from `path`; a missing or unreadable file yields defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({e}), using defaults", path.display());
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Clamp values the game can't run with
    fn sanitized(mut self) -> Self {
        if self.target_fps == 0 {
            self.target_fps = FPS;
        }
        if !(self.window_scale.is_finite() && self.window_scale > 0.0) {
            self.window_scale = 1.0;
        }
        self
    }

    /// Run seed: configured, or derived from the wall clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Window size in physical pixels
    pub fn window_size(&self) -> (u32, u32) {
        use crate::consts::{HEIGHT, WIDTH};
        (
            (WIDTH * self.window_scale).round() as u32,
            (HEIGHT * self.window_scale).round() as u32,
        )
    }
}
