//! Colors and spacing shared by the built-in widgets

pub mod colors;
pub mod layout;

pub use colors::{
    COLOR_ACTIVE, COLOR_BACKGROUND, COLOR_HIGHLIGHT, COLOR_STROKE, COLOR_SURFACE, ColorPalette,
    GRAY, LIGHT_GRAY, WHITE,
};
pub use layout::Padding;
