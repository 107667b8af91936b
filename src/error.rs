//! Error types
//!
//! Gameplay itself has no failure path. Errors only come from building a
//! config and from presenting a frame.

use thiserror::Error;

/// A game config that cannot drive a session
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config value `{field}` must be finite and positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("config value `{field}` must be finite and non-negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("config value `{field}` must be finite (got {value})")]
    NotFinite { field: &'static str, value: f32 },
    #[error("bird diameter {diameter} does not fit the surface height {height}")]
    BirdTooLarge { diameter: f32, height: f32 },
    #[error("gap can reach {bottom}, past the surface height {height}")]
    GapOutOfBounds { bottom: f32, height: f32 },
    #[error("could not parse config")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A frame that could not be presented. Always recoverable: the frame is skipped.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("drawing surface is unavailable")]
    Unavailable,
    #[error("drawing surface was lost and has been reconfigured")]
    Lost,
    #[error("GPU ran out of memory")]
    OutOfMemory,
    #[error("surface error: {0}")]
    Surface(String),
}
