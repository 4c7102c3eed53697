// src/ui/components/mod.rs
//! UI components library

pub mod choice;
pub mod gauge;
pub mod icon;
pub mod separator;
pub mod text;
pub mod toggle;
pub mod widget_choice;

pub use choice::Choice;
pub use gauge::{Gauge, Numeric, Orientation};
pub use icon::Icon;
pub use separator::Separator;
pub use text::{LABEL_CAPACITY, Label, TextSize};
pub use toggle::Toggle;
pub use widget_choice::WidgetChoice;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::{Baseline, Text, TextStyleBuilder};
use heapless::String;

use crate::ui::context::Context;

/// Horizontal inset of widget text
const TEXT_INSET: i32 = 3;

/// Fill the widget region, optionally with a 1px outline.
pub(crate) fn draw_frame(ctx: &mut Context<'_>, size: Size, fill: Rgb565, outline: Option<Rgb565>) {
    let mut style = PrimitiveStyleBuilder::new().fill_color(fill);
    if let Some(color) = outline {
        style = style
            .stroke_color(color)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside);
    }
    Rectangle::new(ctx.display_pos(), size)
        .into_styled(style.build())
        .draw(&mut ctx.canvas())
        .ok();
}

/// Draw one line of text vertically centred at the left of the region.
pub(crate) fn draw_text(
    ctx: &mut Context<'_>,
    size: Size,
    text: &str,
    text_size: TextSize,
    color: Rgb565,
) {
    draw_text_at(ctx, Point::new(TEXT_INSET, size.height as i32 / 2), text, text_size, color);
}

/// Draw one line of text with its vertical middle at `offset` from the region origin.
pub(crate) fn draw_text_at(
    ctx: &mut Context<'_>,
    offset: Point,
    text: &str,
    text_size: TextSize,
    color: Rgb565,
) {
    let character_style = MonoTextStyle::new(text_size.font(), color);
    let text_style = TextStyleBuilder::new().baseline(Baseline::Middle).build();
    Text::with_text_style(text, ctx.display_pos() + offset, character_style, text_style)
        .draw(&mut ctx.canvas())
        .ok();
}

/// Copy as many whole characters of `text` as fit into `N` bytes.
pub(crate) fn truncate<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
