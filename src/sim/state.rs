//! Game state and core simulation types
//!
//! One `GameState` exists per session. A restart replaces it wholesale.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Complete session state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Vertical center of the bird, kept within `[radius, height - radius]`
    pub bird_y: f32,
    /// Left edge of the current obstacle
    pub obstacle_x: f32,
    /// Top of the passable gap in the current obstacle
    pub gap_offset: f32,
    /// Obstacles passed this session
    pub score: u32,
    /// Session ended; nothing mutates the state after this
    pub is_over: bool,
}

impl GameState {
    /// Fresh session: bird centered, obstacle at the right edge
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        Self {
            bird_y: config.surface_height / 2.0,
            obstacle_x: config.surface_width,
            gap_offset: roll_gap_offset(config, rng),
            score: 0,
            is_over: false,
        }
    }

    /// Bottom of the passable gap
    #[inline]
    pub fn gap_bottom(&self, config: &GameConfig) -> f32 {
        self.gap_offset + config.gap_height
    }

    /// Top edge of the bird
    #[inline]
    pub fn bird_top(&self, config: &GameConfig) -> f32 {
        self.bird_y - config.bird_radius
    }

    /// Bottom edge of the bird
    #[inline]
    pub fn bird_bottom(&self, config: &GameConfig) -> f32 {
        self.bird_y + config.bird_radius
    }
}

/// Draw a gap offset from `[gap_offset_min, gap_offset_min + gap_offset_range)`
pub fn roll_gap_offset<R: Rng>(config: &GameConfig, rng: &mut R) -> f32 {
    let min = config.gap_offset_min;
    let max = min + config.gap_offset_range;
    let offset = rng.random_range(min..max);
    // Float rounding can land on the excluded upper bound
    if offset < max { offset } else { min }
}
