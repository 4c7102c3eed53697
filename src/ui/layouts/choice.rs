// src/ui/layouts/choice.rs
//! Scrolling list whose selection wraps like a choice

use alloc::rc::Rc;
use core::time::Duration;

use embedded_graphics::prelude::*;

use crate::error::Result;
use crate::ui::binding::{Binding, Clock};
use crate::ui::context::Context;
use crate::ui::core::{Command, EnableState, Navigable, Scrollable, Widget};
use crate::ui::layouts::scrollable::Scroll;
use crate::ui::layouts::strategy::Layout;
use crate::ui::selector::Selector;
use crate::ui::styling::Padding;

/// A [`Scroll`] whose selection is driven by a wrapping [`Selector`].
///
/// The selector and the container index are kept in lockstep: whichever side
/// moves, the other is resynchronised and the selected child is scrolled
/// into view with the smallest possible offset change.
pub struct ScrollChoice<const N: usize> {
    scroll: Scroll<N>,
    selector: Selector,
    enabled: bool,
}

impl<const N: usize> ScrollChoice<N> {
    pub fn new(viewport: Size) -> Self {
        Self {
            scroll: Scroll::new(viewport),
            selector: Selector::new(0),
            enabled: true,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.scroll = self.scroll.with_layout(layout);
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.scroll = self.scroll.with_padding(padding);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.scroll = self.scroll.with_timeout(timeout);
        self
    }

    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.scroll = self.scroll.with_clock(clock);
        self
    }

    /// Share the selected index with the application.
    pub fn with_binding(mut self, binding: Binding<usize>) -> Self {
        self.selector = self.selector.with_binding(binding);
        self.sync_from_selector();
        self
    }

    /// Callback fired when a command moves the selection.
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
    }

    /// Append a child; the first child added becomes the selection.
    pub fn add_child<W: Widget + 'static>(&mut self, widget: W) -> Result<usize> {
        let index = self.scroll.add_child(widget)?;
        self.selector.set_len(self.scroll.len());
        self.sync_from_selector();
        Ok(index)
    }

    pub fn with_child<W: Widget + 'static>(mut self, widget: W) -> Result<Self> {
        self.add_child(widget)?;
        Ok(self)
    }

    pub fn scroll(&self) -> &Scroll<N> {
        &self.scroll
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn index(&self) -> Option<usize> {
        self.scroll.index()
    }

    pub fn offset(&self) -> Point {
        self.scroll.offset()
    }

    /// Select a child on both sides and scroll it into view.
    pub fn set_index(&mut self, index: Option<usize>) {
        self.scroll.set_index(index);
        self.sync_to_selector();
    }

    pub fn set_active(&mut self, index: Option<usize>) {
        self.scroll.set_active(index);
        self.sync_to_selector();
    }

    fn sync_from_selector(&mut self) {
        let current = self.selector.current();
        self.scroll.set_index(current);
        if let Some(i) = current {
            self.scroll.ensure_visible(i);
        }
    }

    /// A cleared container index leaves the selector where it was.
    fn sync_to_selector(&mut self) {
        if let Some(i) = self.scroll.index() {
            self.selector.set_index(i as isize, false);
            self.scroll.ensure_visible(i);
        }
    }
}

impl<const N: usize> Widget for ScrollChoice<N> {
    fn size(&self) -> Size {
        self.scroll.size()
    }

    fn draw(&mut self, ctx: &mut Context<'_>) {
        self.scroll.draw(ctx);
    }

    fn interact(&mut self, cmd: Command) -> bool {
        if !self.enabled || self.scroll.is_active() {
            return self.scroll.interact(cmd);
        }
        if self.selector.handle(cmd) {
            // A reset must not bring back a selection dropped by idle
            let reset = matches!(cmd.short(), Command::Esc | Command::Back);
            if !(reset && self.scroll.index().is_none()) {
                self.sync_from_selector();
            }
            return true;
        }

        let before = self.scroll.index();
        let handled = self.scroll.interact(cmd);
        if self.scroll.index() != before {
            self.sync_to_selector();
        }
        handled
    }

    fn set_selected(&mut self, selected: bool) {
        self.scroll.set_selected(selected);
    }

    fn is_selected(&self) -> bool {
        self.scroll.is_selected()
    }

    fn as_enable_state(&self) -> Option<&dyn EnableState> {
        Some(self)
    }

    fn as_scrollable(&mut self) -> Option<&mut dyn Scrollable> {
        Some(&mut self.scroll)
    }

    fn as_navigable(&self) -> Option<&dyn Navigable> {
        Some(self)
    }

    fn as_navigable_mut(&mut self) -> Option<&mut dyn Navigable> {
        Some(self)
    }
}

impl<const N: usize> EnableState for ScrollChoice<N> {
    fn enabled(&self) -> bool {
        self.enabled
    }
}

impl<const N: usize> Navigable for ScrollChoice<N> {
    fn index(&self) -> Option<usize> {
        self.scroll.index()
    }

    fn set_index(&mut self, index: Option<usize>) {
        ScrollChoice::set_index(self, index);
    }

    fn is_active(&self) -> bool {
        self.scroll.is_active()
    }

    fn set_active(&mut self, index: Option<usize>) {
        ScrollChoice::set_active(self, index);
    }

    fn deactivate(&mut self) {
        Navigable::deactivate(&mut self.scroll);
    }

    fn child_count(&self) -> usize {
        self.scroll.len()
    }

    fn child(&self, index: usize) -> Option<&dyn Widget> {
        Navigable::child(&self.scroll, index)
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Widget> {
        Navigable::child_mut(&mut self.scroll, index)
    }
}
