//! Per-frame simulation step
//!
//! `advance` moves the world one frame, `step` adds the collision check.
//! Both are pure apart from the injected RNG.

use glam::Vec2;
use rand::Rng;

use super::collision::collided;
use super::state::{GameState, roll_gap_offset};
use crate::config::GameConfig;

/// Advance the game state by one frame
///
/// A known sample pins the bird to the sample's height, clamped to the
/// surface. With no sample the bird holds its altitude.
pub fn advance<R: Rng>(
    state: &GameState,
    sample: Option<Vec2>,
    config: &GameConfig,
    rng: &mut R,
) -> GameState {
    if state.is_over {
        return *state;
    }

    let mut next = *state;

    if let Some(sample) = sample {
        next.bird_y = sample.y.clamp(config.bird_min_y(), config.bird_max_y());
    }

    next.obstacle_x -= config.obstacle_speed;
    if next.obstacle_x < -config.obstacle_width {
        next.obstacle_x = config.surface_width;
        next.gap_offset = roll_gap_offset(config, rng);
        next.score += 1;
        log::debug!(
            "Obstacle wrapped: score {} next gap at {:.1}",
            next.score,
            next.gap_offset
        );
    }

    next
}

/// Advance one frame, then decide whether the session is over
pub fn step<R: Rng>(
    state: &GameState,
    sample: Option<Vec2>,
    config: &GameConfig,
    rng: &mut R,
) -> GameState {
    if state.is_over {
        return *state;
    }

    let mut next = advance(state, sample, config, rng);
    next.is_over = collided(&next, config);
    next
}
