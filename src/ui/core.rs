// src/ui/core.rs
//! Core UI traits and types
//!
//! Every node in a widget tree implements [`Widget`]. Optional behaviour is
//! discovered through the `as_*` accessors, each of which hands out one of the
//! small capability traits below or `None` when the widget does not take part.

use embedded_graphics::prelude::*;

use crate::ui::context::Context;

/// Discrete user commands understood by widgets and containers
///
/// Raw input (buttons, serial lines, keyboards) is mapped into this enum
/// before it reaches the widget tree.
///
/// Directional commands share one convention everywhere: `Up`, `Next` and
/// `Right` move forward (the following child, the next item, a larger
/// value), `Down`, `Prev` and `Left` move backward. See
/// [`Command::direction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Periodic tick without user input
    Idle,
    Up,
    Down,
    Left,
    Right,
    Next,
    Prev,
    Enter,
    Esc,
    Back,
    Del,
    Reset,
    Save,
    Load,
    LongUp,
    LongDown,
    LongLeft,
    LongRight,
    LongNext,
    LongPrev,
    LongEnter,
    LongEsc,
    LongBack,
    LongDel,
    LongReset,
    LongSave,
    LongLoad,
    /// Application-specific command
    User(u8),
}

impl Command {
    /// The long-press variant of this command, or itself if there is none.
    pub fn long(self) -> Self {
        match self {
            Command::Up => Command::LongUp,
            Command::Down => Command::LongDown,
            Command::Left => Command::LongLeft,
            Command::Right => Command::LongRight,
            Command::Next => Command::LongNext,
            Command::Prev => Command::LongPrev,
            Command::Enter => Command::LongEnter,
            Command::Esc => Command::LongEsc,
            Command::Back => Command::LongBack,
            Command::Del => Command::LongDel,
            Command::Reset => Command::LongReset,
            Command::Save => Command::LongSave,
            Command::Load => Command::LongLoad,
            other => other,
        }
    }

    /// The short-press variant of this command, or itself if it is already short.
    pub fn short(self) -> Self {
        match self {
            Command::LongUp => Command::Up,
            Command::LongDown => Command::Down,
            Command::LongLeft => Command::Left,
            Command::LongRight => Command::Right,
            Command::LongNext => Command::Next,
            Command::LongPrev => Command::Prev,
            Command::LongEnter => Command::Enter,
            Command::LongEsc => Command::Esc,
            Command::LongBack => Command::Back,
            Command::LongDel => Command::Del,
            Command::LongReset => Command::Reset,
            Command::LongSave => Command::Save,
            Command::LongLoad => Command::Load,
            other => other,
        }
    }

    pub fn is_long(self) -> bool {
        self.short() != self
    }

    /// `+1` for forward commands, `-1` for backward ones, short or long.
    pub fn direction(self) -> Option<isize> {
        match self.short() {
            Command::Up | Command::Next | Command::Right => Some(1),
            Command::Down | Command::Prev | Command::Left => Some(-1),
            _ => None,
        }
    }
}

/// Minimal contract of every node in the widget tree.
pub trait Widget {
    /// Width and height, fixed once the widget is built
    fn size(&self) -> Size;

    /// Render into the region described by `ctx`.
    ///
    /// Drawing never fails; the framebuffer target is infallible.
    fn draw(&mut self, ctx: &mut Context<'_>);

    /// Handle a command and report whether it was consumed.
    fn interact(&mut self, cmd: Command) -> bool;

    fn set_selected(&mut self, selected: bool);

    fn is_selected(&self) -> bool;

    fn as_selectable(&self) -> Option<&dyn Selectable> {
        None
    }

    fn as_enable_state(&self) -> Option<&dyn EnableState> {
        None
    }

    fn as_focus_handler(&mut self) -> Option<&mut dyn FocusHandler> {
        None
    }

    fn as_activation_handler(&mut self) -> Option<&mut dyn ActivationHandler> {
        None
    }

    fn as_select_handler(&mut self) -> Option<&mut dyn SelectHandler> {
        None
    }

    fn as_exit_handler(&mut self) -> Option<&mut dyn ExitHandler> {
        None
    }

    fn as_visible_handler(&mut self) -> Option<&mut dyn VisibleHandler> {
        None
    }

    fn as_scroll_handler(&mut self) -> Option<&mut dyn ScrollHandler> {
        None
    }

    fn as_scrollable(&mut self) -> Option<&mut dyn Scrollable> {
        None
    }

    fn as_navigable(&self) -> Option<&dyn Navigable> {
        None
    }

    fn as_navigable_mut(&mut self) -> Option<&mut dyn Navigable> {
        None
    }
}

/// Widgets that may opt out of focus traversal
pub trait Selectable {
    fn can_select(&self) -> bool;
}

/// Widgets that can be disabled; disabled widgets are skipped by navigation
pub trait EnableState {
    fn enabled(&self) -> bool;
}

/// Notified when the owning container moves its selection index onto or off
/// this widget
pub trait FocusHandler {
    fn on_focus(&mut self);
    fn on_blur(&mut self);
}

/// Notified when the owning container enters or leaves edit mode on this widget
pub trait ActivationHandler {
    fn on_activate(&mut self);
    fn on_deactivate(&mut self);
}

/// Notified whenever the selected flag actually flips
pub trait SelectHandler {
    fn on_select(&mut self);
    fn on_deselect(&mut self);
}

/// Notified when the widget is left without committing pending edits
pub trait ExitHandler {
    fn on_exit(&mut self);
}

/// Notified when computed visibility changes during a render pass
pub trait VisibleHandler {
    fn on_visible(&mut self, visible: bool);
}

/// Notified on every offset change of the enclosing scroll view
pub trait ScrollHandler {
    fn on_scroll(&mut self, offset: Point);
}

/// Widgets with a manually controllable scroll offset
pub trait Scrollable {
    /// Move the offset by a delta; returns whether it actually changed.
    fn scroll(&mut self, dx: i32, dy: i32) -> bool;

    fn scroll_offset(&self) -> Point;
}

/// Containers the navigator can descend into.
///
/// `None` stands for "no child selected".
pub trait Navigable: Widget {
    fn index(&self) -> Option<usize>;

    fn set_index(&mut self, index: Option<usize>);

    fn is_active(&self) -> bool;

    /// Enter edit mode on `index`, or leave edit mode and drop focus for `None`.
    fn set_active(&mut self, index: Option<usize>);

    /// Leave edit mode while keeping the current selection.
    fn deactivate(&mut self);

    fn child_count(&self) -> usize;

    fn child(&self, index: usize) -> Option<&dyn Widget>;

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Widget>;

    /// The currently selected child
    fn item(&self) -> Option<&dyn Widget> {
        self.index().and_then(|i| self.child(i))
    }

    fn item_mut(&mut self) -> Option<&mut dyn Widget> {
        match self.index() {
            Some(i) => self.child_mut(i),
            None => None,
        }
    }
}

/// Whether a widget takes part in focus traversal.
///
/// Both `can_select` and `enabled`, when present, must not report false.
pub fn is_selectable(widget: &dyn Widget) -> bool {
    if let Some(selectable) = widget.as_selectable()
        && !selectable.can_select()
    {
        return false;
    }
    if let Some(state) = widget.as_enable_state()
        && !state.enabled()
    {
        return false;
    }
    true
}

/// Size and selection state shared by most widgets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetBase {
    pub size: Size,
    pub selected: bool,
}

impl WidgetBase {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            selected: false,
        }
    }

    /// Default command handling: `Esc` clears the selected flag.
    pub fn interact(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Esc => {
                self.selected = false;
                true
            }
            _ => false,
        }
    }
}
