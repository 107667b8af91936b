//! GPU vertex format

use bytemuck::{Pod, Zeroable};

/// Flat-colored 2D vertex
///
/// Built in surface pixels by the tessellator, then mapped to clip space with
/// `to_clip` right before upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Map surface pixels (origin top-left, y down) to clip space (origin center, y up)
    pub fn to_clip(self, width: f32, height: f32) -> Self {
        let [x, y] = self.position;
        Self::new(x / width * 2.0 - 1.0, 1.0 - y / height * 2.0, self.color)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.96, 0.96, 0.97, 1.0];
    pub const OBSTACLE: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const BIRD: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const FINGER_MARKER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const TEXT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const GAME_OVER: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
}
