//! Vertex type for textured 2D quads

use bytemuck::{Pod, Zeroable};

use crate::Rgba8;
use crate::consts::{HEIGHT, WIDTH};

/// 2D vertex with texture coordinates and a tint
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, u: f32, v: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            tex_coords: [u, v],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::offset_of!(Vertex, tex_coords) as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::offset_of!(Vertex, color) as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Convert viewport pixels (y down) to normalized device coordinates.
/// The 960x540 viewport is stretched over whatever the window size is.
pub fn screen_to_ndc(x: f32, y: f32) -> [f32; 2] {
    [x / WIDTH * 2.0 - 1.0, 1.0 - y / HEIGHT * 2.0]
}

/// Vertex tint for an sRGB color. An sRGB render target expects linear
/// values (the hardware re-encodes on write); a plain UNORM target takes the
/// sRGB values as they are.
pub fn tint(color: Rgba8, srgb_target: bool) -> [f32; 4] {
    let channel = |c: u8| {
        let c = c as f32 / 255.0;
        if !srgb_target {
            c
        } else if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    [
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3] as f32 / 255.0,
    ]
}
