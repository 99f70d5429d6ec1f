use raylib::prelude::Color;

use crate::core::geometry::Rect;

pub const TOKEN_COLOR: Color = Color { r: 255, g: 255, b: 0, a: 255 };

/// A collectible. Being in a room's token list is its whole state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub rect: Rect,
}

impl Token {
    pub fn new(x: i32, y: i32, size: i32) -> Self {
        Self { rect: Rect::new(x, y, size, size) }
    }
}
