//! Rendering module
//!
//! [`display_list::compose`] turns game state into draw commands; the wgpu
//! [`RenderState`] turns those into textured quads.

pub mod display_list;
pub mod font;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use display_list::{Anchor, DrawCmd, SheetId, compose};
pub use pipeline::RenderState;
