//! Rendering module
//!
//! `scene` composes a frame as plain draw commands. The WebGPU backend in
//! `pipeline` tessellates the shapes into flat-colored triangles; `hud` turns
//! the text into labels for the page.

pub mod hud;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use hud::{HudLabel, labels};
pub use pipeline::RenderState;
pub use scene::{Color, DrawCmd, DrawList, RecordingSurface, Surface, compose};
