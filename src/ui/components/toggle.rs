// src/ui/components/toggle.rs
//! On/off switch bound to a boolean

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use heapless::String;
use log::debug;

use crate::ui::binding::Binding;
use crate::ui::components::text::{LABEL_CAPACITY, TextSize};
use crate::ui::components::{draw_frame, draw_text, truncate};
use crate::ui::context::Context;
use crate::ui::core::{Command, Widget, WidgetBase};
use crate::ui::styling::ColorPalette;

const SWITCH_SIZE: Size = Size::new(16, 8);

/// Labelled switch writing straight through to a `Binding<bool>`
pub struct Toggle {
    base: WidgetBase,
    label: String<LABEL_CAPACITY>,
    value: Binding<bool>,
    palette: ColorPalette,
}

impl Toggle {
    pub fn new(size: Size, label: &str, value: Binding<bool>) -> Self {
        Self {
            base: WidgetBase::new(size),
            label: truncate(label),
            value,
            palette: ColorPalette::default(),
        }
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn is_on(&self) -> bool {
        self.value.get()
    }

    pub fn flip(&mut self) {
        let on = !self.value.get();
        self.value.set(on);
        debug!("Toggle '{}' -> {}", self.label, on);
    }
}

impl Widget for Toggle {
    fn size(&self) -> Size {
        self.base.size
    }

    fn draw(&mut self, ctx: &mut Context<'_>) {
        let size = self.base.size;
        let outline = self.base.selected.then_some(self.palette.highlight);
        draw_frame(ctx, size, self.palette.background, outline);
        draw_text(ctx, size, &self.label, TextSize::Medium, self.palette.text);

        let at = Point::new(
            size.width as i32 - SWITCH_SIZE.width as i32 - 4,
            (size.height as i32 - SWITCH_SIZE.height as i32) / 2,
        );
        let fill = if self.value.get() {
            self.palette.highlight
        } else {
            self.palette.surface
        };
        Rectangle::new(ctx.display_pos() + at, SWITCH_SIZE)
            .into_styled(PrimitiveStyle::with_fill(fill))
            .draw(&mut ctx.canvas())
            .ok();
    }

    fn interact(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Enter | Command::Left | Command::Right => {
                self.flip();
                true
            }
            _ => self.base.interact(cmd),
        }
    }

    fn set_selected(&mut self, selected: bool) {
        self.base.selected = selected;
    }

    fn is_selected(&self) -> bool {
        self.base.selected
    }
}
