// src/ui/selector.rs
//! Wrapping index over a fixed number of items

use alloc::boxed::Box;

use log::trace;

use crate::ui::binding::Binding;
use crate::ui::core::Command;

/// Callback fired with the new index after a user-driven change
pub type ChangeFn = Box<dyn FnMut(usize)>;

/// Cycles an index through `len` items with wraparound.
///
/// Used by [`Choice`](crate::ui::components::Choice) for its item list and by
/// [`ScrollChoice`](crate::ui::layouts::ScrollChoice) to mirror the
/// container selection. The optional binding is written every time an index
/// is applied and read back on reset.
pub struct Selector {
    len: usize,
    index: usize,
    binding: Option<Binding<usize>>,
    enabled: bool,
    on_change: Option<ChangeFn>,
}

impl Selector {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            binding: None,
            enabled: true,
            on_change: None,
        }
    }

    /// Share the index with the application; the current value is loaded.
    pub fn with_binding(mut self, binding: Binding<usize>) -> Self {
        self.binding = Some(binding);
        self.reset(false);
        self
    }

    pub fn with_on_change<F: FnMut(usize) + 'static>(mut self, on_change: F) -> Self {
        self.on_change = Some(Box::new(on_change));
        self
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Change the number of items, keeping the index in range.
    ///
    /// A bound value that fits the new length is loaded.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if let Some(value) = self.binding.as_ref().map(Binding::get)
            && value < len
        {
            self.index = value;
        } else if self.index >= len {
            self.index = len.saturating_sub(1);
        }
    }

    /// Raw index, meaningful only when not empty.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current index, or `None` without items.
    pub fn current(&self) -> Option<usize> {
        (self.len > 0).then_some(self.index)
    }

    /// Handle a command; returns whether it was consumed.
    pub fn handle(&mut self, cmd: Command) -> bool {
        if !self.enabled || self.len == 0 {
            return false;
        }
        if let Some(step) = cmd.direction() {
            self.set_index(self.index as isize + step, true);
            return true;
        }
        match cmd.short() {
            Command::Esc | Command::Back => {
                self.reset(false);
                true
            }
            _ => false,
        }
    }

    /// Reload the index from the binding, if any.
    pub fn reset(&mut self, notify: bool) {
        let Some(value) = self.binding.as_ref().map(Binding::get) else {
            return;
        };
        self.set_index(value as isize, notify);
    }

    /// Apply an index, wrapping out-of-range values around the item count.
    ///
    /// The binding is written every time; the change callback only runs
    /// when `notify` is set and the index actually moved.
    pub fn set_index(&mut self, index: isize, notify: bool) {
        if self.len == 0 {
            return;
        }
        let prev = self.index;
        self.index = wrap_index(index, self.len);
        if let Some(binding) = &self.binding {
            binding.set(self.index);
        }
        if self.index != prev {
            trace!("Selector {} -> {}", prev, self.index);
            if notify && let Some(on_change) = self.on_change.as_mut() {
                on_change(self.index);
            }
        }
    }
}

fn wrap_index(index: isize, len: usize) -> usize {
    index.rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn test_wraps_both_ways() {
        let mut selector = Selector::new(4);

        assert!(selector.handle(Command::Down));
        assert_eq!(selector.current(), Some(3), "Going back from 0 wraps to the end");
        assert!(selector.handle(Command::Up));
        assert_eq!(selector.current(), Some(0), "Advancing past the end wraps to 0");
        assert!(selector.handle(Command::LongRight));
        assert_eq!(selector.current(), Some(1), "Long variants move too");
    }

    #[test]
    fn test_reset_reloads_binding_silently() {
        let binding = Binding::new(2usize);
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();
        let mut selector = Selector::new(4)
            .with_binding(binding.clone())
            .with_on_change(move |i| sink.borrow_mut().push(i));

        assert_eq!(selector.current(), Some(2));
        selector.handle(Command::Next);
        assert_eq!(binding.get(), 3, "Binding follows every applied index");

        binding.set(1);
        assert!(selector.handle(Command::Esc));
        assert_eq!(selector.current(), Some(1));
        assert_eq!(*changes.borrow(), [3], "Reset does not notify");
    }

    #[test]
    fn test_disabled_and_empty_consume_nothing() {
        let mut empty = Selector::new(0);
        assert!(!empty.handle(Command::Next));
        assert_eq!(empty.current(), None);

        let mut selector = Selector::new(3);
        selector.set_enabled(false);
        assert!(!selector.handle(Command::Next));
        assert!(!Selector::new(3).handle(Command::Enter));
    }

    #[test]
    fn test_set_len_keeps_index_in_range() {
        let mut selector = Selector::new(4);
        selector.set_index(3, false);
        selector.set_len(2);
        assert_eq!(selector.current(), Some(1));
    }
}
