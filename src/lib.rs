//! Widget toolkit for small embedded displays.
//!
//! A tree of widgets (labels, gauges, toggles, choices and containers) is
//! rendered into a RAM [`FrameBuffer`](framebuffer::FrameBuffer) and driven
//! by a small vocabulary of discrete [`Command`](ui::Command)s. The
//! [`Navigator`](navigator::Navigator) keeps track of which container level
//! is active and where focus sits inside it.
//!
//! The crate is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod framebuffer;
pub mod input;
pub mod navigator;
pub mod ui;

#[cfg(test)]
pub(crate) mod testing;

pub use config::UiConfig;
pub use error::{Error, Result};
pub use framebuffer::FrameBuffer;
pub use input::{CommandDecoder, PressClassifier};
pub use navigator::{
    MAX_DEPTH, Navigator, NavigatorEvent, NavigatorEventKind, NavigatorObserver, Path, PathSegment,
};
