//! Color definitions in RGB565
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

/// Screen background - very dark gray-blue
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);

/// Panel and track fill - slightly lighter than the background
pub const COLOR_SURFACE: Rgb565 = Rgb565::new(26 >> 3, 32 >> 2, 33 >> 3);

/// Outline color - medium gray
pub const COLOR_STROKE: Rgb565 = Rgb565::new(43 >> 3, 55 >> 2, 57 >> 3);

/// Focus highlight - bright teal-green
pub const COLOR_HIGHLIGHT: Rgb565 = Rgb565::new(95 >> 3, 185 >> 2, 141 >> 3);

/// Edit-mode accent - warm orange
pub const COLOR_ACTIVE: Rgb565 = Rgb565::new(200 >> 3, 145 >> 2, 85 >> 3);

pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);

/// Colors used by the built-in widgets for each interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    pub background: Rgb565,
    pub surface: Rgb565,
    pub border: Rgb565,
    pub text: Rgb565,
    pub text_muted: Rgb565,
    /// Outline of the focused widget
    pub highlight: Rgb565,
    /// Fill of a widget being edited
    pub active: Rgb565,
    pub disabled: Rgb565,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    pub fn dark() -> Self {
        Self {
            background: COLOR_BACKGROUND,
            surface: COLOR_SURFACE,
            border: COLOR_STROKE,
            text: WHITE,
            text_muted: LIGHT_GRAY,
            highlight: COLOR_HIGHLIGHT,
            active: COLOR_ACTIVE,
            disabled: GRAY,
        }
    }

    /// Text color for a widget in the given state.
    pub fn text_for(&self, enabled: bool) -> Rgb565 {
        if enabled { self.text } else { self.disabled }
    }
}
