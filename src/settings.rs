//! Session settings
//!
//! Loaded from an optional JSON file; any missing field falls back to the
//! built-in default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::FieldPolicy;
use crate::sim::bounds::MapInfo;

/// Tunable session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: f32,
    pub window_height: f32,

    // === Map ===
    /// Map size in tiles
    pub map_width_tiles: u32,
    pub map_height_tiles: u32,
    /// Scale applied to 32px tiles
    pub tile_scaling: f32,

    // === Physics ===
    /// Downward acceleration (pixels/s²)
    pub gravity: f32,
    /// Fraction of velocity kept per second
    pub damping: f32,
    pub max_horizontal_speed: f32,
    pub max_vertical_speed: f32,
    pub field: FieldPolicy,

    // === Camera ===
    pub camera_pan_speed: f32,

    /// Seed for body colours
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            map_width_tiles: 100,
            map_height_tiles: 30,
            tile_scaling: TILE_SCALING,

            gravity: GRAVITY,
            damping: DEFAULT_DAMPING,
            max_horizontal_speed: MAX_HORIZONTAL_SPEED,
            max_vertical_speed: MAX_VERTICAL_SPEED,
            field: FieldPolicy::default(),

            camera_pan_speed: CAMERA_PAN_SPEED,

            seed: 0x5EED,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults if the file
    /// is missing or malformed
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {} - using default settings", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Bad settings in {}: {} - using default settings", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn window(&self) -> Vec2 {
        Vec2::new(self.window_width, self.window_height)
    }

    pub fn map(&self) -> MapInfo {
        MapInfo {
            width_tiles: self.map_width_tiles,
            height_tiles: self.map_height_tiles,
            grid_pixel_size: 32.0 * self.tile_scaling,
        }
    }

    pub fn gravity_vec(&self) -> Vec2 {
        Vec2::new(0.0, -self.gravity)
    }
}
