//! Shared value cells and time sources
//!
//! Editable widgets stage their edits privately and only write through a
//! [`Binding`] at commit points; they read it back at load points.

use alloc::rc::Rc;
use core::cell::Cell;
use core::time::Duration;

/// Caller-owned value shared with one or more widgets
///
/// Cloning a binding yields another handle to the same cell.
#[derive(Debug, Default)]
pub struct Binding<T: Copy>(Rc<Cell<T>>);

impl<T: Copy> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Copy> Binding<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(Cell::new(value)))
    }

    pub fn get(&self) -> T {
        self.0.get()
    }

    pub fn set(&self, value: T) {
        self.0.set(value);
    }
}

/// Monotonic time source used for idle timeouts and long-press detection
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin
    fn now(&self) -> Duration;
}

/// Clock advanced by hand, for tests and deterministic replays
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_clones_share_state() {
        let a = Binding::new(3u8);
        let b = a.clone();
        b.set(7);
        assert_eq!(a.get(), 7, "Clones must observe the same cell");
    }

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_millis(250));
        clock.advance(Duration::from_millis(250));
        assert_eq!(clock.now(), Duration::from_millis(500));
    }
}
