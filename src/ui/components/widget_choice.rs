// src/ui/components/widget_choice.rs
//! Slot that shows one of several widgets at a time

use alloc::boxed::Box;

use embedded_graphics::prelude::*;
use heapless::Vec;
use log::trace;

use crate::error::{Error, Result};
use crate::ui::binding::Binding;
use crate::ui::context::Context;
use crate::ui::core::{Command, EnableState, Widget, WidgetBase};
use crate::ui::selector::Selector;

/// Rotates through up to `N` widgets, drawing only the current one.
///
/// Direction commands and `Esc`/`Back` go to a wrapping [`Selector`]
/// (optionally bound to an index); anything else is forwarded to the shown
/// widget. The slot's selected flag is mirrored onto whichever widget is
/// shown, with select handlers notified on every hand-over.
///
/// # Examples
/// ```ignore
/// let mut mode = WidgetChoice::<3>::new(Size::new(120, 14)).with_binding(page.clone());
/// mode.add_child(Label::new(Size::new(120, 14), "Clock"))?;
/// mode.add_child(Gauge::new(Size::new(120, 14), "Volume", volume, 0u8, 10, 1))?;
/// ```
pub struct WidgetChoice<const N: usize> {
    base: WidgetBase,
    items: Vec<Box<dyn Widget>, N>,
    selector: Selector,
    shown: Option<usize>,
    enabled: bool,
}

impl<const N: usize> WidgetChoice<N> {
    pub fn new(size: Size) -> Self {
        Self {
            base: WidgetBase::new(size),
            items: Vec::new(),
            selector: Selector::new(0),
            shown: None,
            enabled: true,
        }
    }

    /// Share the shown index with the application.
    pub fn with_binding(mut self, binding: Binding<usize>) -> Self {
        self.selector = self.selector.with_binding(binding);
        self.show_current();
        self
    }

    /// Callback fired when a command switches the shown widget.
    pub fn with_on_change<F: FnMut(usize) + 'static>(mut self, on_change: F) -> Self {
        self.selector = self.selector.with_on_change(on_change);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.set_enabled(false);
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.selector.set_enabled(enabled);
        if !enabled {
            self.set_selected(false);
        }
    }

    /// Append a widget and return its index.
    ///
    /// # Errors
    /// [`Error::ContainerFull`] once `N` widgets have been added.
    pub fn add_child<W: Widget + 'static>(&mut self, widget: W) -> Result<usize> {
        self.items
            .push(Box::new(widget))
            .map_err(|_| Error::ContainerFull { capacity: N })?;
        self.selector.set_len(self.items.len());
        self.show_current();
        Ok(self.items.len() - 1)
    }

    pub fn with_child<W: Widget + 'static>(mut self, widget: W) -> Result<Self> {
        self.add_child(widget)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the shown widget, `None` while empty.
    pub fn current(&self) -> Option<usize> {
        self.shown
    }

    pub fn current_widget(&self) -> Option<&dyn Widget> {
        self.shown
            .and_then(|i| self.items.get(i))
            .map(|w| &**w as &dyn Widget)
    }

    /// Hand the slot over to the selector's index.
    fn show_current(&mut self) {
        let next = self.selector.current();
        if next == self.shown {
            return;
        }
        let selected = self.base.selected;
        if let Some(prev) = self.shown.and_then(|i| self.items.get_mut(i)) {
            mirror_selection(&mut **prev, false);
        }
        self.shown = next;
        if let Some(widget) = next.and_then(|i| self.items.get_mut(i)) {
            mirror_selection(&mut **widget, selected);
        }
        trace!("Widget choice shows {:?}", next);
    }
}

/// Set the selected flag, notifying the select handler on a flip.
fn mirror_selection(widget: &mut dyn Widget, selected: bool) {
    if widget.is_selected() == selected {
        return;
    }
    widget.set_selected(selected);
    if let Some(handler) = widget.as_select_handler() {
        if selected {
            handler.on_select();
        } else {
            handler.on_deselect();
        }
    }
}

impl<const N: usize> Widget for WidgetChoice<N> {
    fn size(&self) -> Size {
        self.base.size
    }

    fn draw(&mut self, ctx: &mut Context<'_>) {
        if let Some(widget) = self.shown.and_then(|i| self.items.get_mut(i)) {
            let mut child = ctx.clone_for(widget.size());
            widget.draw(&mut child);
        }
    }

    fn interact(&mut self, cmd: Command) -> bool {
        if !self.enabled {
            return false;
        }
        if self.selector.handle(cmd) {
            self.show_current();
            return true;
        }
        match self.shown.and_then(|i| self.items.get_mut(i)) {
            Some(widget) => widget.interact(cmd),
            None => self.base.interact(cmd),
        }
    }

    fn set_selected(&mut self, selected: bool) {
        self.base.selected = selected;
        if let Some(widget) = self.shown.and_then(|i| self.items.get_mut(i)) {
            mirror_selection(&mut **widget, selected);
        }
    }

    fn is_selected(&self) -> bool {
        self.base.selected
    }

    fn as_enable_state(&self) -> Option<&dyn EnableState> {
        Some(self)
    }
}

impl<const N: usize> EnableState for WidgetChoice<N> {
    fn enabled(&self) -> bool {
        self.enabled
    }
}
