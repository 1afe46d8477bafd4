//! Drawing capability
//!
//! The simulation never draws. A frontend implements [`Canvas`] and hands it
//! to [`scene::draw_frame`] once per frame; exact visuals are up to it.

pub mod scene;

use glam::Vec2;
use serde::Serialize;

pub use scene::draw_frame;

/// RGBA color, 0-1 per channel
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const ASTEROID: Color = [1.0, 1.0, 1.0, 1.0];
    pub const SHIP: Color = [0.4, 0.8, 1.0, 1.0];
    pub const BULLET: Color = [1.0, 1.0, 1.0, 1.0];
    pub const LASER: Color = [0.9, 0.16, 0.22, 1.0];
    pub const HP_BACK: Color = [0.31, 0.31, 0.31, 1.0];
    pub const HP_FILL: Color = [0.0, 0.89, 0.19, 1.0];
    pub const HP_FRAME: Color = [0.96, 0.96, 0.96, 1.0];
    pub const WEAPON_LABEL: Color = [0.0, 0.47, 0.95, 1.0];
    pub const SCORE_LABEL: Color = [0.99, 0.98, 0.0, 1.0];
    pub const VICTORY: Color = [1.0, 0.8, 0.0, 1.0];
    pub const DEFEAT: Color = [0.9, 0.16, 0.22, 1.0];
}

/// Minimal immediate-mode drawing surface
pub trait Canvas {
    /// Clear the whole surface
    fn clear(&mut self, color: Color);

    /// Outline of a regular polygon; `rotation` in degrees
    fn draw_poly(&mut self, center: Vec2, sides: u32, radius: f32, rotation: f32, color: Color);

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Filled axis-aligned rectangle with top-left corner `min`
    fn draw_rect(&mut self, min: Vec2, size: Vec2, color: Color);

    /// Rectangle outline
    fn draw_rect_lines(&mut self, min: Vec2, size: Vec2, color: Color);

    /// Text with its top-left corner at `pos`
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);

    /// Width of `text` at `size`; the default assumes a half-em advance
    fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear(Color),
    Poly {
        center: Vec2,
        sides: u32,
        radius: f32,
        rotation: f32,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        min: Vec2,
        size: Vec2,
        color: Color,
    },
    RectLines {
        min: Vec2,
        size: Vec2,
        color: Color,
    },
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

/// Canvas that records every call; used headless and in tests
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame's commands
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw_poly(&mut self, center: Vec2, sides: u32, radius: f32, rotation: f32, color: Color) {
        self.commands.push(DrawCommand::Poly {
            center,
            sides,
            radius,
            rotation,
            color,
        });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_rect(&mut self, min: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::Rect { min, size, color });
    }

    fn draw_rect_lines(&mut self, min: Vec2, size: Vec2, color: Color) {
        self.commands.push(DrawCommand::RectLines { min, size, color });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            size,
            color,
        });
    }
}
