//! Collision detection
//!
//! A single pure predicate deciding whether the session is over. Edge contact
//! counts as a hit: the vertical bounds use `<=`/`>=` and the gap window is
//! strictly open on both sides.

use super::state::GameState;
use crate::config::GameConfig;
use crate::consts::BIRD_X;

/// Whether the bird touches the top, the bottom, or the solid part of the obstacle
pub fn collided(state: &GameState, config: &GameConfig) -> bool {
    if state.bird_top(config) <= 0.0 || state.bird_bottom(config) >= config.surface_height {
        return true;
    }

    obstacle_overlaps_bird(state, config) && !within_gap(state, config)
}

/// Obstacle band `[x, x + w)` intersects the bird span `[BIRD_X - r, BIRD_X + r)`
pub fn obstacle_overlaps_bird(state: &GameState, config: &GameConfig) -> bool {
    let bird_left = BIRD_X - config.bird_radius;
    let bird_right = BIRD_X + config.bird_radius;
    state.obstacle_x < bird_right && state.obstacle_x + config.obstacle_width > bird_left
}

/// Bird center strictly inside the gap window
pub fn within_gap(state: &GameState, config: &GameConfig) -> bool {
    state.gap_offset < state.bird_y && state.bird_y < state.gap_bottom(config)
}
