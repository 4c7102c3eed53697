//! Recording widget shared by the unit tests

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use embedded_graphics::prelude::*;

use crate::ui::context::Context;
use crate::ui::core::{
    ActivationHandler, Command, EnableState, ExitHandler, FocusHandler, ScrollHandler,
    SelectHandler, Selectable, VisibleHandler, Widget,
};

/// Capability callback observed by a [`Recorder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Select,
    Deselect,
    Focus,
    Blur,
    Activate,
    Deactivate,
    Exit,
    Visible(bool),
    Scroll(Point),
}

struct RecorderState {
    size: Size,
    selected: Cell<bool>,
    can_select: Cell<bool>,
    enabled: Cell<bool>,
    handles: Cell<bool>,
    draws: Cell<usize>,
    events: RefCell<Vec<Event>>,
    commands: RefCell<Vec<Command>>,
}

/// Widget implementing every capability and recording what happens to it.
///
/// Clones share state, so a test keeps one handle while the tree owns another.
#[derive(Clone)]
pub struct Recorder(Rc<RecorderState>);

impl Recorder {
    pub fn new(size: Size) -> Self {
        Self(Rc::new(RecorderState {
            size,
            selected: Cell::new(false),
            can_select: Cell::new(true),
            enabled: Cell::new(true),
            handles: Cell::new(false),
            draws: Cell::new(0),
            events: RefCell::new(Vec::new()),
            commands: RefCell::new(Vec::new()),
        }))
    }

    pub fn unselectable(size: Size) -> Self {
        let recorder = Self::new(size);
        recorder.0.can_select.set(false);
        recorder
    }

    pub fn disabled(size: Size) -> Self {
        let recorder = Self::new(size);
        recorder.0.enabled.set(false);
        recorder
    }

    /// Make `interact` report commands as handled.
    pub fn set_handles(&self, handles: bool) {
        self.0.handles.set(handles);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.events.borrow().clone()
    }

    pub fn commands(&self) -> Vec<Command> {
        self.0.commands.borrow().clone()
    }

    pub fn draws(&self) -> usize {
        self.0.draws.get()
    }

    pub fn selected(&self) -> bool {
        self.0.selected.get()
    }

    /// Whether the last focus callback was `on_focus`.
    pub fn focused(&self) -> bool {
        self.0
            .events
            .borrow()
            .iter()
            .rev()
            .find_map(|e| match e {
                Event::Focus => Some(true),
                Event::Blur => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn clear(&self) {
        self.0.events.borrow_mut().clear();
        self.0.commands.borrow_mut().clear();
    }

    fn record(&self, event: Event) {
        self.0.events.borrow_mut().push(event);
    }
}

impl Widget for Recorder {
    fn size(&self) -> Size {
        self.0.size
    }

    fn draw(&mut self, _ctx: &mut Context<'_>) {
        self.0.draws.set(self.0.draws.get() + 1);
    }

    fn interact(&mut self, cmd: Command) -> bool {
        self.0.commands.borrow_mut().push(cmd);
        self.0.handles.get()
    }

    fn set_selected(&mut self, selected: bool) {
        self.0.selected.set(selected);
    }

    fn is_selected(&self) -> bool {
        self.0.selected.get()
    }

    fn as_selectable(&self) -> Option<&dyn Selectable> {
        Some(self)
    }

    fn as_enable_state(&self) -> Option<&dyn EnableState> {
        Some(self)
    }

    fn as_focus_handler(&mut self) -> Option<&mut dyn FocusHandler> {
        Some(self)
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

    fn as_visible_handler(&mut self) -> Option<&mut dyn VisibleHandler> {
        Some(self)
    }

    fn as_scroll_handler(&mut self) -> Option<&mut dyn ScrollHandler> {
        Some(self)
    }
}

impl Selectable for Recorder {
    fn can_select(&self) -> bool {
        self.0.can_select.get()
    }
}

impl EnableState for Recorder {
    fn enabled(&self) -> bool {
        self.0.enabled.get()
    }
}

impl FocusHandler for Recorder {
    fn on_focus(&mut self) {
        self.record(Event::Focus);
    }

    fn on_blur(&mut self) {
        self.record(Event::Blur);
    }
}

impl ActivationHandler for Recorder {
    fn on_activate(&mut self) {
        self.record(Event::Activate);
    }

    fn on_deactivate(&mut self) {
        self.record(Event::Deactivate);
    }
}

impl SelectHandler for Recorder {
    fn on_select(&mut self) {
        self.record(Event::Select);
    }

    fn on_deselect(&mut self) {
        self.record(Event::Deselect);
    }
}

impl ExitHandler for Recorder {
    fn on_exit(&mut self) {
        self.record(Event::Exit);
    }
}

impl VisibleHandler for Recorder {
    fn on_visible(&mut self, visible: bool) {
        self.record(Event::Visible(visible));
    }
}

impl ScrollHandler for Recorder {
    fn on_scroll(&mut self, offset: Point) {
        self.record(Event::Scroll(offset));
    }
}
