// src/ui/components/choice.rs
//! Labelled choice between a fixed list of strings

use embedded_graphics::prelude::*;
use heapless::String;
use log::debug;

use crate::ui::binding::Binding;
use crate::ui::components::text::{LABEL_CAPACITY, TextSize};
use crate::ui::components::{draw_frame, draw_text, draw_text_at, truncate};
use crate::ui::context::Context;
use crate::ui::core::{ActivationHandler, Command, ExitHandler, SelectHandler, Widget, WidgetBase};
use crate::ui::selector::Selector;
use crate::ui::styling::ColorPalette;

/// Cycles through `items` while being edited.
///
/// Edits are staged in a [`Selector`]; `Enter` commits the staged index to
/// the binding, while `Esc`/`Back` and being exited by the container reload
/// it from the binding.
pub struct Choice {
    base: WidgetBase,
    label: String<LABEL_CAPACITY>,
    items: &'static [&'static str],
    selector: Selector,
    value: Binding<usize>,
    editing: bool,
    palette: ColorPalette,
}

impl Choice {
    pub fn new(
        size: Size,
        label: &str,
        items: &'static [&'static str],
        value: Binding<usize>,
    ) -> Self {
        let mut choice = Self {
            base: WidgetBase::new(size),
            label: truncate(label),
            items,
            selector: Selector::new(items.len()),
            value,
            editing: false,
            palette: ColorPalette::default(),
        };
        choice.revert();
        choice
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Callback fired when the staged item changes.
    pub fn with_on_change<F: FnMut(usize) + 'static>(mut self, on_change: F) -> Self {
        self.selector = self.selector.with_on_change(on_change);
        self
    }

    /// Staged item, `None` for an empty list.
    pub fn current(&self) -> Option<&'static str> {
        self.selector.current().and_then(|i| self.items.get(i).copied())
    }

    pub fn commit(&mut self) {
        if let Some(index) = self.selector.current() {
            self.value.set(index);
            debug!("Choice '{}' committed {}", self.label, index);
        }
    }

    pub fn revert(&mut self) {
        self.selector.set_index(self.value.get() as isize, false);
    }
}

impl Widget for Choice {
    fn size(&self) -> Size {
        self.base.size
    }

    fn draw(&mut self, ctx: &mut Context<'_>) {
        let size = self.base.size;
        let fill = if self.editing {
            self.palette.active
        } else {
            self.palette.background
        };
        let outline = self.base.selected.then_some(self.palette.highlight);
        draw_frame(ctx, size, fill, outline);
        draw_text(ctx, size, &self.label, TextSize::Medium, self.palette.text);

        if let Some(item) = self.current() {
            let at = Point::new(size.width as i32 / 2, size.height as i32 / 2);
            draw_text_at(ctx, at, item, TextSize::Medium, self.palette.text_muted);
        }
    }

    fn interact(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Enter => {
                self.commit();
                true
            }
            Command::Esc | Command::Back => {
                self.revert();
                true
            }
            _ => self.selector.handle(cmd) || self.base.interact(cmd),
        }
    }

    fn set_selected(&mut self, selected: bool) {
        self.base.selected = selected;
    }

    fn is_selected(&self) -> bool {
        self.base.selected
    }

    fn as_activation_handler(&mut self) -> Option<&mut dyn ActivationHandler> {
        Some(self)
    }

    fn as_select_handler(&mut self) -> Option<&mut dyn SelectHandler> {
        Some(self)
    }

    fn as_exit_handler(&mut self) -> Option<&mut dyn ExitHandler> {
        Some(self)
    }
}

impl ActivationHandler for Choice {
    fn on_activate(&mut self) {
        self.editing = true;
    }

    fn on_deactivate(&mut self) {
        self.editing = false;
    }
}

impl SelectHandler for Choice {
    fn on_select(&mut self) {
        self.revert();
    }

    fn on_deselect(&mut self) {}
}

impl ExitHandler for Choice {
    fn on_exit(&mut self) {
        self.revert();
    }
}
