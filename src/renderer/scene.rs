//! Frame composition
//!
//! Turns a `GameState` into an ordered list of draw primitives. Composition is
//! a read-only projection of the state; presenting the list is the job of a
//! `Surface` backend.

use glam::Vec2;

use super::vertex::colors;
use crate::config::GameConfig;
use crate::consts::*;
use crate::error::RenderError;
use crate::sim::GameState;

/// RGBA color, components in `0..=1`
pub type Color = [f32; 4];

/// One drawing primitive in surface coordinates (origin top-left, y down)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole surface
    Clear { color: Color },
    /// Axis-aligned filled rectangle
    Rect { pos: Vec2, size: Vec2, color: Color },
    /// Filled circle
    Circle { center: Vec2, radius: f32, color: Color },
    /// Text with its baseline starting at `pos`
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

/// Ordered draw commands for one frame, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self, color: Color) {
        self.commands.push(DrawCmd::Clear { color });
    }

    pub fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCmd::Rect { pos, size, color });
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCmd::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn fill_text(&mut self, text: impl Into<String>, pos: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCmd::Text {
            text: text.into(),
            pos,
            size,
            color,
        });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text strings in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Something a finished frame can be presented on
pub trait Surface {
    /// Present one frame. An error means this frame is skipped, nothing more.
    fn present(&mut self, frame: &DrawList) -> Result<(), RenderError>;
}

/// Build the draw list for one frame
///
/// Z-order: obstacle top, obstacle bottom, bird, finger marker (when a sample
/// is known), score, then the game over overlay (only when the session ended).
pub fn compose(state: &GameState, sample: Option<Vec2>, config: &GameConfig) -> DrawList {
    let mut frame = DrawList::new();
    frame.clear(colors::BACKGROUND);

    let gap_bottom = state.gap_bottom(config);
    frame.fill_rect(
        Vec2::new(state.obstacle_x, 0.0),
        Vec2::new(config.obstacle_width, state.gap_offset),
        colors::OBSTACLE,
    );
    frame.fill_rect(
        Vec2::new(state.obstacle_x, gap_bottom),
        Vec2::new(config.obstacle_width, config.surface_height - gap_bottom),
        colors::OBSTACLE,
    );

    frame.fill_circle(Vec2::new(BIRD_X, state.bird_y), config.bird_radius, colors::BIRD);

    if let Some(sample) = sample {
        frame.fill_circle(
            Vec2::new(sample.x + config.marker_offset_x, sample.y),
            config.marker_radius,
            colors::FINGER_MARKER,
        );
    }

    frame.fill_text(
        format!("Score: {}", state.score),
        Vec2::from(SCORE_POS),
        SCORE_SIZE,
        colors::TEXT,
    );

    if state.is_over {
        frame.fill_text(
            "Game Over",
            Vec2::from(GAME_OVER_POS),
            GAME_OVER_SIZE,
            colors::GAME_OVER,
        );
        frame.fill_text(
            "Press R to restart",
            Vec2::from(RESTART_PROMPT_POS),
            RESTART_PROMPT_SIZE,
            colors::TEXT,
        );
    }

    frame
}

/// Surface that keeps the last presented frame in memory
///
/// Used by the headless demo and by tests. Can be switched off to stand in
/// for a canvas that is not available.
#[derive(Debug)]
pub struct RecordingSurface {
    /// Last successfully presented frame
    pub last: Option<DrawList>,
    /// Frames presented so far
    pub presented: u64,
    /// Frames refused because the surface was unavailable
    pub skipped: u64,
    available: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            last: None,
            presented: 0,
            skipped: 0,
            available: true,
        }
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for RecordingSurface {
    fn present(&mut self, frame: &DrawList) -> Result<(), RenderError> {
        if !self.available {
            self.skipped += 1;
            return Err(RenderError::Unavailable);
        }
        self.last = Some(frame.clone());
        self.presented += 1;
        Ok(())
    }
}
