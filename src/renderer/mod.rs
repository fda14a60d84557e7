//! Drawing onto an external surface
//!
//! Pixel rendering belongs to the host. The arena describes each frame as a
//! sequence of draw commands against `DrawSurface` and never reads back.

pub mod recording;
pub mod scene;

pub use recording::{DrawCommand, RecordingSurface};
pub use scene::draw_arena;

use glam::Vec2;

use crate::sim::SpriteHandle;

/// RGBA color, components in `0.0..=1.0`
pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
/// Dimming overlay behind the game over text
pub const SHADE: Color = [0.0, 0.0, 0.0, 0.4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Font, size, alignment and color of a text draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub align: TextAlign,
    pub font: &'static str,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub const fn mono(align: TextAlign, size: f32, color: Color) -> Self {
        Self {
            align,
            font: "monospace",
            size,
            color,
        }
    }
}

/// Commands the host drawing surface accepts
pub trait DrawSurface {
    fn clear(&mut self);
    fn draw_sprite(&mut self, sprite: SpriteHandle, pos: Vec2, scale: Vec2);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);
    fn draw_text(&mut self, text: &str, pos: Vec2, style: TextStyle);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
}
