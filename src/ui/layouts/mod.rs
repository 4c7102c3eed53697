// src/ui/layouts/mod.rs
//! Layout components for arranging UI elements

pub mod choice;
pub mod container;
pub mod scrollable;
pub mod strategy;

pub use choice::ScrollChoice;
pub use container::Container;
pub use scrollable::{Scroll, ScrollChange, ScrollObserver};
pub use strategy::{Layout, LayoutFn};
