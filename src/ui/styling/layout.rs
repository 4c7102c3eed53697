//! Padding and margin primitives

use embedded_graphics::prelude::*;

/// Space between a region's border and its content, per side in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Padding {
    /// Equal padding on all sides
    pub fn all(value: u32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// `vertical` for top and bottom, `horizontal` for left and right
    pub fn symmetric(vertical: u32, horizontal: u32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Total horizontal padding (left + right)
    pub fn horizontal(&self) -> u32 {
        self.left + self.right
    }

    /// Total vertical padding (top + bottom)
    pub fn vertical(&self) -> u32 {
        self.top + self.bottom
    }

    /// Offset of the content's top-left corner
    pub fn top_left(&self) -> Point {
        Point::new(self.left as i32, self.top as i32)
    }

    /// Shrink `size` by the padding on every side, saturating at zero.
    pub fn shrink(&self, size: Size) -> Size {
        Size::new(
            size.width.saturating_sub(self.horizontal()),
            size.height.saturating_sub(self.vertical()),
        )
    }
}
