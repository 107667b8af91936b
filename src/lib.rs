//! Flappy Finger - a flappy bird steered by the index finger
//!
//! Core modules:
//! - `sim`: Pure game logic (physics, collisions, game state)
//! - `game_loop`: Two-state frame scheduler and restart handling
//! - `renderer`: Draw list composition and the WebGPU backend
//! - `platform`: Hand-sample mailbox and host key mapping
//! - `config`: Validated game constants

pub mod config;
pub mod error;
pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, RenderError};
pub use game_loop::{FrameRequest, GameLoop, LoopPhase};

/// Fixed game constants
pub mod consts {
    /// Horizontal center of the bird. Used for hit-testing and drawing alike.
    pub const BIRD_X: f32 = 100.0;

    /// Score text anchor and size
    pub const SCORE_POS: (f32, f32) = (10.0, 30.0);
    pub const SCORE_SIZE: f32 = 24.0;

    /// Game over overlay anchor and size
    pub const GAME_OVER_POS: (f32, f32) = (180.0, 200.0);
    pub const GAME_OVER_SIZE: f32 = 36.0;
    /// Restart prompt drawn under the overlay
    pub const RESTART_PROMPT_POS: (f32, f32) = (180.0, 250.0);
    pub const RESTART_PROMPT_SIZE: f32 = 18.0;
}
