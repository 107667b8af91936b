//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call per frame, no timers
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{collided, obstacle_overlaps_bird, within_gap};
pub use state::{GameState, roll_gap_offset};
pub use tick::{advance, step};
