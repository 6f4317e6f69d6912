//! Quad generation for draw commands
//!
//! Every command becomes one or more textured quads (two triangles each).
//! Consecutive quads that sample the same texture share a draw batch.

use super::display_list::{DrawCmd, SheetId};
use super::font;
use super::vertex::{Vertex, tint};
use crate::assets::SheetGrid;
use crate::colors;
use crate::consts::{HEIGHT, WIDTH};
use crate::sim::Rect;

/// Texture a batch samples from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKey {
    /// 1x1 white pixel for flat color
    White,
    Sheet(SheetId),
    Background(usize),
}

/// A run of vertices drawn with one texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawBatch {
    pub texture: TextureKey,
    pub first: u32,
    pub count: u32,
}

/// Vertices for a whole frame, in viewport pixels
#[derive(Debug, Default)]
pub struct FrameGeometry {
    pub vertices: Vec<Vertex>,
    pub batches: Vec<DrawBatch>,
}

const FULL_UV: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// Two triangles covering `rect`; `uv` is `[u0, v0, u1, v1]`
pub fn quad(rect: Rect, uv: [f32; 4], color: [f32; 4]) -> [Vertex; 6] {
    let [u0, v0, u1, v1] = uv;
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    [
        Vertex::new(l, t, u0, v0, color),
        Vertex::new(l, b, u0, v1, color),
        Vertex::new(r, t, u1, v0, color),
        Vertex::new(r, t, u1, v0, color),
        Vertex::new(l, b, u0, v1, color),
        Vertex::new(r, b, u1, v1, color),
    ]
}

impl FrameGeometry {
    fn push_quad(&mut self, texture: TextureKey, rect: Rect, uv: [f32; 4], color: [f32; 4]) {
        let start = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&quad(rect, uv, color));
        match self.batches.last_mut() {
            Some(last) if last.texture == texture => last.count += 6,
            _ => self.batches.push(DrawBatch {
                texture,
                first: start,
                count: 6,
            }),
        }
    }
}

/// Build the vertex stream for a frame; `srgb_target` selects the tint
/// encoding (see [`tint`])
pub fn build(
    cmds: &[DrawCmd],
    cat: &SheetGrid,
    dog: &SheetGrid,
    srgb_target: bool,
) -> FrameGeometry {
    let mut geom = FrameGeometry::default();
    for cmd in cmds {
        match cmd {
            DrawCmd::Background { frame } => geom.push_quad(
                TextureKey::Background(*frame),
                Rect::new(0.0, 0.0, WIDTH, HEIGHT),
                FULL_UV,
                tint(colors::WHITE, srgb_target),
            ),
            DrawCmd::Rect { rect, color } => {
                geom.push_quad(TextureKey::White, *rect, FULL_UV, tint(*color, srgb_target))
            }
            DrawCmd::Sprite {
                sheet,
                cell,
                dest,
                flip_x,
            } => {
                let grid = match sheet {
                    SheetId::Cat => cat,
                    SheetId::Dog => dog,
                };
                geom.push_quad(
                    TextureKey::Sheet(*sheet),
                    *dest,
                    grid.uv_rect(cell.0, cell.1, *flip_x),
                    tint(colors::WHITE, srgb_target),
                );
            }
            DrawCmd::Text {
                text,
                x,
                y,
                scale,
                anchor,
                color,
            } => {
                let color = tint(*color, srgb_target);
                for rect in font::layout(text, *x, *y, *scale, *anchor) {
                    geom.push_quad(TextureKey::White, rect, FULL_UV, color);
                }
            }
        }
    }
    geom
}
