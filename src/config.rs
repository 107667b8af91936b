//! Game configuration
//!
//! Everything here is fixed for the lifetime of a session. A config is
//! validated once when a `GameLoop` is built; per-frame code assumes it holds.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Game constants (defaults match the 640x480 browser canvas)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Surface ===
    /// Drawing surface width in pixels
    pub surface_width: f32,
    /// Drawing surface height in pixels
    pub surface_height: f32,

    // === Bird ===
    /// Radius of the player token
    pub bird_radius: f32,

    // === Obstacle ===
    /// Height of the passable gap
    pub gap_height: f32,
    /// Horizontal distance travelled per frame
    pub obstacle_speed: f32,
    /// Obstacle width in pixels
    pub obstacle_width: f32,
    /// Lowest gap offset a respawn can draw
    pub gap_offset_min: f32,
    /// Width of the gap offset draw range
    pub gap_offset_range: f32,

    // === Finger marker ===
    /// Radius of the raw-sample marker
    pub marker_radius: f32,
    /// Horizontal shift applied to the marker
    pub marker_offset_x: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: 640.0,
            surface_height: 480.0,

            bird_radius: 20.0,

            gap_height: 150.0,
            obstacle_speed: 5.0,
            obstacle_width: 60.0,
            gap_offset_min: 100.0,
            gap_offset_range: 200.0,

            marker_radius: 10.0,
            marker_offset_x: -20.0,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Check every constant once, up front
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("surface_width", self.surface_width)?;
        positive("surface_height", self.surface_height)?;
        positive("bird_radius", self.bird_radius)?;
        positive("gap_height", self.gap_height)?;
        positive("obstacle_speed", self.obstacle_speed)?;
        positive("obstacle_width", self.obstacle_width)?;
        positive("gap_offset_range", self.gap_offset_range)?;
        positive("marker_radius", self.marker_radius)?;
        non_negative("gap_offset_min", self.gap_offset_min)?;
        finite("marker_offset_x", self.marker_offset_x)?;

        let diameter = 2.0 * self.bird_radius;
        if diameter >= self.surface_height {
            return Err(ConfigError::BirdTooLarge {
                diameter,
                height: self.surface_height,
            });
        }

        let bottom = self.gap_offset_min + self.gap_offset_range + self.gap_height;
        if bottom > self.surface_height {
            return Err(ConfigError::GapOutOfBounds {
                bottom,
                height: self.surface_height,
            });
        }

        Ok(())
    }

    /// Lowest allowed bird center
    #[inline]
    pub fn bird_min_y(&self) -> f32 {
        self.bird_radius
    }

    /// Highest allowed bird center
    #[inline]
    pub fn bird_max_y(&self) -> f32 {
        self.surface_height - self.bird_radius
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}
