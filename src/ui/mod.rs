// src/ui/mod.rs
//! Widget tree, layouts and drawing context
//!
//! This module provides:
//! - The [`Widget`] contract and the optional capability traits
//! - Containers that own children and track selection and edit mode
//! - Scrolling containers and a wrapping scroll choice
//! - Leaf components (labels, toggles, choices, gauges)
//! - Shared colors and spacing

pub mod binding;
pub mod components;
pub mod context;
pub mod core;
pub mod layouts;
pub mod selector;
pub mod styling;

// Re-export commonly used items
pub use binding::{Binding, Clock, ManualClock};
pub use components::{
    Choice, Gauge, Icon, Label, Numeric, Orientation, Separator, TextSize, Toggle, WidgetChoice,
};
pub use context::{Context, Cursor};
pub use self::core::{
    ActivationHandler, Command, EnableState, ExitHandler, FocusHandler, Navigable, ScrollHandler,
    Scrollable, SelectHandler, Selectable, VisibleHandler, Widget, WidgetBase, is_selectable,
};
pub use layouts::{
    Container, Layout, LayoutFn, Scroll, ScrollChange, ScrollChoice, ScrollObserver,
};
pub use selector::Selector;
pub use styling::{ColorPalette, Padding};
