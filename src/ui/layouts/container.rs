// src/ui/layouts/container.rs
//! Container holding an ordered list of child widgets with single selection

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::time::Duration;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;
use log::{debug, trace};

use crate::config::DEFAULT_IDLE_TIMEOUT_MS;
use crate::error::{Error, Result};
use crate::ui::binding::Clock;
use crate::ui::context::Context;
use crate::ui::core::{Command, Navigable, Widget, WidgetBase};
use crate::ui::layouts::strategy::Layout;
use crate::ui::styling::Padding;

/// Ordered collection of child widgets with a selection index and an
/// active (edit mode) flag.
///
/// Insertion order is navigation order. While inactive the container moves
/// its own selection on `Prev`/`Next` and enters edit mode on `Enter`; while
/// active every command except `Idle` goes straight to the selected child.
///
/// # Type Parameters
/// - `N`: Maximum number of children (compile-time constant)
///
/// # Examples
/// ```ignore
/// let mut menu = Container::<4>::new(Size::new(120, 0))
///     .with_layout(Layout::VList(2))
///     .with_padding(Padding::all(4));
///
/// menu.add_child(Label::new(Size::new(112, 12), "Brightness"))?;
/// menu.add_child(Toggle::new(Size::new(112, 12), "Sound", sound.clone()))?;
/// ```
pub struct Container<const N: usize> {
    base: WidgetBase,
    /// Requested size; zero axes are measured from the children
    requested: Size,
    children: Vec<Box<dyn Widget>, N>,
    /// Last visibility reported to each child
    visible: [Option<bool>; N],
    index: Option<usize>,
    active: bool,
    /// Child that last received `on_activate` and has not been left since
    activated: Option<usize>,
    layout: Option<Layout>,
    padding: Padding,
    margin: Padding,
    timeout: Duration,
    clock: Option<Rc<dyn Clock>>,
    last_interaction: Duration,
}

impl<const N: usize> Container<N> {
    /// Create an empty container.
    ///
    /// A zero width or height is resolved by measuring the children once a
    /// layout is configured.
    pub fn new(size: Size) -> Self {
        Self {
            base: WidgetBase::new(size),
            requested: size,
            children: Vec::new(),
            visible: [None; N],
            index: None,
            active: false,
            activated: None,
            layout: None,
            padding: Padding::default(),
            margin: Padding::default(),
            timeout: Duration::from_millis(DEFAULT_IDLE_TIMEOUT_MS as u64),
            clock: None,
            last_interaction: Duration::ZERO,
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self.resolve_size();
        self
    }

    /// Inner spacing applied before the first child is placed.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self.resolve_size();
        self
    }

    /// Outer spacing that shrinks the drawable region on every side.
    pub fn with_margin(mut self, margin: Padding) -> Self {
        self.margin = margin;
        self.resolve_size();
        self
    }

    /// Idle period after which `Command::Idle` drops the selection.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Time source for idle tracking. Without one, idle never fires.
    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.last_interaction = clock.now();
        self.clock = Some(clock);
        self
    }

    /// Append a child and return its index.
    ///
    /// # Errors
    /// [`Error::ContainerFull`] once `N` children have been added.
    pub fn add_child<W: Widget + 'static>(&mut self, widget: W) -> Result<usize> {
        self.add_boxed(Box::new(widget))
    }

    pub fn add_boxed(&mut self, widget: Box<dyn Widget>) -> Result<usize> {
        self.children
            .push(widget)
            .map_err(|_| Error::ContainerFull { capacity: N })?;
        self.resolve_size();
        Ok(self.children.len() - 1)
    }

    /// Builder form of [`add_child`](Self::add_child).
    pub fn with_child<W: Widget + 'static>(mut self, widget: W) -> Result<Self> {
        self.add_child(widget)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn layout(&self) -> Option<Layout> {
        self.layout
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn get(&self, index: usize) -> Option<&dyn Widget> {
        self.children.get(index).map(|c| &**c as &dyn Widget)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut dyn Widget> {
        self.children
            .get_mut(index)
            .map(|c| &mut **c as &mut dyn Widget)
    }

    pub(crate) fn children_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Widget>> {
        self.children.iter_mut()
    }

    /// Select a child, clamping to the valid range.
    ///
    /// No-op when the clamped index equals the current one. Otherwise the
    /// activated child is exited, the selected flags of the old and new
    /// child flip (with select handlers notified), the old child is blurred
    /// and the new one focused. While in edit mode the new child is then
    /// activated; `None` leaves edit mode instead.
    pub fn set_index(&mut self, index: Option<usize>) {
        let target = self.clamp_index(index);
        if target == self.index {
            return;
        }
        let prev = self.index;

        if let Some(activated) = self.activated
            && Some(activated) != target
        {
            self.activated = None;
            self.leave_child(activated);
        }

        for (i, child) in self.children.iter_mut().enumerate() {
            let selected = Some(i) == target;
            if child.is_selected() != selected {
                child.set_selected(selected);
                notify_selection(&mut **child, selected);
            }
        }

        self.index = target;
        if target.is_none() {
            self.active = false;
        }
        trace!("Container index {:?} -> {:?}", prev, target);

        if let Some(child) = prev.and_then(|i| self.children.get_mut(i))
            && let Some(handler) = child.as_focus_handler()
        {
            handler.on_blur();
        }
        if let Some(child) = target.and_then(|i| self.children.get_mut(i))
            && let Some(handler) = child.as_focus_handler()
        {
            handler.on_focus();
        }

        if self.active
            && let Some(next) = target
        {
            self.activate_child(next);
        }
    }

    /// Enter edit mode on `index`, or leave it and drop the selection for `None`.
    ///
    /// A previously activated child that is not the new target is
    /// deactivated and exited before the new one is activated. Activating
    /// the child that already holds activation fires nothing.
    pub fn set_active(&mut self, index: Option<usize>) {
        let Some(index) = index else {
            if let Some(activated) = self.activated.take() {
                self.leave_child(activated);
            }
            self.active = false;
            self.set_index(None);
            return;
        };

        self.set_index(Some(index));
        let Some(next) = self.index else {
            self.active = false;
            return;
        };

        if let Some(prev) = self.activated
            && prev != next
        {
            self.leave_child(prev);
        }

        self.active = true;
        self.activate_child(next);
    }

    /// Leave edit mode but keep the selection.
    pub fn deactivate(&mut self) {
        self.active = false;
        let Some(activated) = self.activated.take() else {
            return;
        };
        if let Some(handler) = self
            .children
            .get_mut(activated)
            .and_then(|c| c.as_activation_handler())
        {
            handler.on_deactivate();
        }
    }

    fn activate_child(&mut self, index: usize) {
        if self.activated == Some(index) {
            return;
        }
        self.activated = Some(index);
        debug!("Container activated child {}", index);
        if let Some(handler) = self
            .children
            .get_mut(index)
            .and_then(|c| c.as_activation_handler())
        {
            handler.on_activate();
        }
    }

    fn leave_child(&mut self, index: usize) {
        let Some(child) = self.children.get_mut(index) else {
            return;
        };
        debug!("Container left child {}", index);
        if let Some(handler) = child.as_activation_handler() {
            handler.on_deactivate();
        }
        if let Some(handler) = child.as_exit_handler() {
            handler.on_exit();
        }
    }

    fn clamp_index(&self, index: Option<usize>) -> Option<usize> {
        if self.children.is_empty() {
            return None;
        }
        index.map(|i| i.min(self.children.len() - 1))
    }

    fn touch(&mut self) {
        if let Some(clock) = &self.clock {
            self.last_interaction = clock.now();
        }
    }

    fn handle_idle(&mut self) -> bool {
        if let Some(clock) = &self.clock
            && clock.now().saturating_sub(self.last_interaction) > self.timeout
            && self.index.is_some()
        {
            debug!("Container idle for over {:?}, dropping focus", self.timeout);
            self.set_index(None);
        }
        false
    }

    fn handle_inactive(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Prev => {
                if let Some(i) = self.index
                    && i > 0
                {
                    self.set_index(Some(i - 1));
                }
                true
            }
            Command::Next => {
                let next = self.index.map_or(0, |i| i + 1);
                if next < self.children.len() {
                    self.set_index(Some(next));
                }
                true
            }
            Command::Enter => match self.index {
                Some(i) => {
                    self.set_active(Some(i));
                    true
                }
                None => false,
            },
            _ => self.base.interact(cmd),
        }
    }

    /// Extent of the laid out children from the local origin, including
    /// padding on all sides. Without a layout this is the current size.
    pub(crate) fn content_size(&self) -> Size {
        match self.layout {
            Some(layout) => {
                let extent = layout.measure(
                    self.padding.top_left(),
                    self.children.iter().map(|c| c.size()),
                );
                Size::new(
                    extent.width + self.padding.right,
                    extent.height + self.padding.bottom,
                )
            }
            None => self.base.size,
        }
    }

    /// Local rectangle of a child relative to the content origin.
    pub(crate) fn child_rect(&self, index: usize) -> Option<Rectangle> {
        let size = self.children.get(index)?.size();
        match self.layout {
            Some(layout) => layout.rect_of(
                self.padding.top_left(),
                self.children.iter().map(|c| c.size()),
                index,
            ),
            None => Some(Rectangle::new(self.padding.top_left(), size)),
        }
    }

    fn resolve_size(&mut self) {
        if self.layout.is_none() || (self.requested.width != 0 && self.requested.height != 0) {
            return;
        }
        let content = self.content_size();
        if self.requested.width == 0 {
            self.base.size.width = content.width + self.margin.horizontal();
        }
        if self.requested.height == 0 {
            self.base.size.height = content.height + self.margin.vertical();
        }
    }

    /// Lay out and draw the children into `ctx`, starting at the padding.
    ///
    /// Children outside the clip are skipped but still advance the layout;
    /// visibility handlers only hear about transitions.
    pub(crate) fn draw_children(&mut self, ctx: &mut Context<'_>) {
        ctx.cursor_mut().begin(self.padding.top_left());

        for (i, child) in self.children.iter_mut().enumerate() {
            let size = child.size();
            let shown = ctx.cursor().is_visible(size);

            if self.visible[i] != Some(shown) {
                self.visible[i] = Some(shown);
                if let Some(handler) = child.as_visible_handler() {
                    handler.on_visible(shown);
                }
            }

            if shown {
                let mut child_ctx = ctx.clone_for(size);
                child.draw(&mut child_ctx);
            }

            if let Some(layout) = self.layout
                && !layout.advance(ctx.cursor_mut(), size)
            {
                return;
            }
        }
    }
}

fn notify_selection(child: &mut dyn Widget, selected: bool) {
    if let Some(handler) = child.as_select_handler() {
        if selected {
            handler.on_select();
        } else {
            handler.on_deselect();
        }
    }
}

impl<const N: usize> Widget for Container<N> {
    fn size(&self) -> Size {
        self.base.size
    }

    fn draw(&mut self, ctx: &mut Context<'_>) {
        let inner = self.margin.shrink(self.base.size);
        let mut at = *ctx.cursor();
        at.add_pos(self.margin.top_left());
        let mut local = ctx.with_cursor(at.child(inner));
        self.draw_children(&mut local);
    }

    fn interact(&mut self, cmd: Command) -> bool {
        if cmd == Command::Idle {
            return self.handle_idle();
        }
        self.touch();

        if self.active
            && let Some(child) = self.index.and_then(|i| self.children.get_mut(i))
        {
            return child.interact(cmd);
        }
        self.handle_inactive(cmd)
    }

    fn set_selected(&mut self, selected: bool) {
        self.base.selected = selected;
    }

    fn is_selected(&self) -> bool {
        self.base.selected
    }

    fn as_navigable(&self) -> Option<&dyn Navigable> {
        Some(self)
    }

    fn as_navigable_mut(&mut self) -> Option<&mut dyn Navigable> {
        Some(self)
    }
}

impl<const N: usize> Navigable for Container<N> {
    fn index(&self) -> Option<usize> {
        self.index
    }

    fn set_index(&mut self, index: Option<usize>) {
        Container::set_index(self, index);
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, index: Option<usize>) {
        Container::set_active(self, index);
    }

    fn deactivate(&mut self) {
        Container::deactivate(self);
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Option<&dyn Widget> {
        self.get(index)
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Widget> {
        self.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::testing::{Event, Recorder};
    use crate::ui::binding::ManualClock;
    use alloc::vec;

    fn container_with(recorders: &[Recorder]) -> Container<8> {
        let mut container = Container::<8>::new(Size::new(20, 0)).with_layout(Layout::VList(2));
        for recorder in recorders {
            container.add_child(recorder.clone()).unwrap();
        }
        container
    }

    fn assert_invariants(container: &Container<8>) {
        if let Some(i) = container.index() {
            assert!(i < container.len(), "Index must stay in range");
        }
        if container.is_active() {
            assert!(container.index().is_some(), "Active implies a selection");
        }
        let selected = (0..container.len())
            .filter(|&i| container.get(i).unwrap().is_selected())
            .count();
        assert_eq!(
            selected,
            container.index().map_or(0, |_| 1),
            "Exactly the indexed child carries the selected flag"
        );
    }

    #[test]
    fn test_add_child_beyond_capacity() {
        let mut container = Container::<2>::new(Size::new(10, 10));
        container.add_child(Recorder::new(Size::new(10, 5))).unwrap();
        container.add_child(Recorder::new(Size::new(10, 5))).unwrap();

        let result = container.add_child(Recorder::new(Size::new(10, 5)));
        assert!(matches!(result, Err(Error::ContainerFull { capacity: 2 })));
    }

    #[test]
    fn test_auto_size_from_layout() {
        let recorders = [Recorder::new(Size::new(18, 10)), Recorder::new(Size::new(20, 10))];
        let container = Container::<4>::new(Size::zero())
            .with_layout(Layout::VList(2))
            .with_padding(Padding::all(1))
            .with_child(recorders[0].clone())
            .unwrap()
            .with_child(recorders[1].clone())
            .unwrap();

        assert_eq!(container.size(), Size::new(22, 24));
    }

    #[test]
    fn test_set_index_clamps_and_notifies_once() {
        let recorders = [
            Recorder::new(Size::new(20, 10)),
            Recorder::new(Size::new(20, 10)),
            Recorder::new(Size::new(20, 10)),
        ];
        let mut container = container_with(&recorders);

        container.set_index(Some(7));
        assert_eq!(container.index(), Some(2), "Out-of-range index is clamped");
        assert_eq!(recorders[2].events(), vec![Event::Select, Event::Focus]);

        container.set_index(Some(2));
        assert_eq!(
            recorders[2].events(),
            vec![Event::Select, Event::Focus],
            "Repeating the same index fires nothing"
        );

        container.set_index(Some(0));
        assert_eq!(
            recorders[2].events(),
            vec![Event::Select, Event::Focus, Event::Deselect, Event::Blur]
        );
        assert!(recorders[1].events().is_empty(), "Untouched children stay quiet");
        assert_invariants(&container);
    }

    #[test]
    fn test_set_index_on_empty_container() {
        let mut container = Container::<4>::new(Size::new(10, 10));
        container.set_index(Some(0));
        assert_eq!(container.index(), None);
        container.set_active(Some(0));
        assert!(!container.is_active(), "Nothing to activate");
    }

    #[test]
    fn test_set_active_transitions() {
        let recorders = [Recorder::new(Size::new(20, 10)), Recorder::new(Size::new(20, 10))];
        let mut container = container_with(&recorders);

        container.set_active(Some(0));
        assert!(container.is_active());
        assert_eq!(
            recorders[0].events(),
            vec![Event::Select, Event::Focus, Event::Activate]
        );

        container.set_active(Some(1));
        assert_eq!(
            recorders[0].events(),
            vec![
                Event::Select,
                Event::Focus,
                Event::Activate,
                Event::Deactivate,
                Event::Exit,
                Event::Deselect,
                Event::Blur
            ],
            "Switching the active child exits the previous one"
        );
        assert_eq!(
            recorders[1].events(),
            vec![Event::Select, Event::Focus, Event::Activate]
        );

        container.set_active(None);
        assert!(!container.is_active());
        assert_eq!(container.index(), None);
        assert_eq!(
            recorders[1].events()[3..],
            [Event::Deactivate, Event::Exit, Event::Deselect, Event::Blur]
        );
        assert_invariants(&container);
    }

    #[test]
    fn test_activation_follows_moved_index() {
        let recorders = [Recorder::new(Size::new(20, 10)), Recorder::new(Size::new(20, 10))];
        let mut container = container_with(&recorders);
        container.set_active(Some(0));
        recorders[0].clear();

        container.set_index(Some(1));
        assert!(container.is_active(), "Moving the index keeps edit mode");
        assert_eq!(
            recorders[0].events(),
            vec![Event::Deactivate, Event::Exit, Event::Deselect, Event::Blur],
            "The old child leaves edit mode with the focus"
        );
        assert_eq!(
            recorders[1].events(),
            vec![Event::Select, Event::Focus, Event::Activate]
        );

        container.set_active(Some(1));
        assert_eq!(
            recorders[1].events().iter().filter(|e| **e == Event::Activate).count(),
            1,
            "Re-activating the same child is silent"
        );

        container.deactivate();
        assert_eq!(recorders[1].events().last(), Some(&Event::Deactivate));
        assert!(
            !recorders[0].events().contains(&Event::Activate),
            "Only the focused child was ever reactivated"
        );
    }

    #[test]
    fn test_inactive_move_does_not_activate() {
        let recorders = [Recorder::new(Size::new(20, 10)), Recorder::new(Size::new(20, 10))];
        let mut container = container_with(&recorders);
        container.set_active(Some(0));
        container.deactivate();

        container.set_index(Some(1));
        assert!(!container.is_active());
        assert!(!recorders[1].events().contains(&Event::Activate));
    }

    #[test]
    fn test_draw_leaves_caller_cursor_alone() {
        let mut container = Container::<2>::new(Size::new(30, 20))
            .with_layout(Layout::VList(0))
            .with_margin(Padding::all(3))
            .with_child(Recorder::new(Size::new(10, 5)))
            .unwrap();
        let mut fb = FrameBuffer::new(Size::new(30, 20));
        let mut ctx = Context::new(&mut fb);

        container.draw(&mut ctx);
        container.draw(&mut ctx);
        assert_eq!(
            ctx.cursor().pos(),
            Point::zero(),
            "Margins apply to the inner region only"
        );
    }

    #[test]
    fn test_deactivate_keeps_selection() {
        let recorders = [Recorder::new(Size::new(20, 10))];
        let mut container = container_with(&recorders);
        container.set_active(Some(0));
        recorders[0].clear();

        container.deactivate();
        assert!(!container.is_active());
        assert_eq!(container.index(), Some(0));
        assert_eq!(recorders[0].events(), vec![Event::Deactivate]);
    }

    #[test]
    fn test_inactive_navigation_does_not_wrap() {
        let recorders = [Recorder::new(Size::new(20, 10)), Recorder::new(Size::new(20, 10))];
        let mut container = container_with(&recorders);

        assert!(container.interact(Command::Next));
        assert_eq!(container.index(), Some(0), "Next from nothing selects the first");
        assert!(container.interact(Command::Next));
        assert!(container.interact(Command::Next), "Next at the end is still handled");
        assert_eq!(container.index(), Some(1));

        assert!(container.interact(Command::Prev));
        assert!(container.interact(Command::Prev));
        assert_eq!(container.index(), Some(0));
    }

    #[test]
    fn test_enter_activates_and_delegates() {
        let recorders = [Recorder::new(Size::new(20, 10)), Recorder::new(Size::new(20, 10))];
        let mut container = container_with(&recorders);

        assert!(!container.interact(Command::Enter), "Enter without selection");

        container.interact(Command::Next);
        assert!(container.interact(Command::Enter));
        assert!(container.is_active());

        recorders[0].set_handles(true);
        assert!(container.interact(Command::Next));
        assert_eq!(
            container.index(),
            Some(0),
            "Active container forwards commands instead of moving"
        );
        assert_eq!(recorders[0].commands(), vec![Command::Next]);
    }

    #[test]
    fn test_esc_falls_back_to_base() {
        let mut container = Container::<2>::new(Size::new(10, 10));
        container.set_selected(true);
        assert!(container.interact(Command::Esc));
        assert!(!container.is_selected());
        assert!(!container.interact(Command::Save));
    }

    #[test]
    fn test_idle_timeout_drops_focus() {
        let clock = Rc::new(ManualClock::new());
        let recorders = [Recorder::new(Size::new(20, 10))];
        let mut container = container_with(&recorders)
            .with_clock(clock.clone())
            .with_timeout(Duration::from_secs(10));

        container.interact(Command::Next);
        clock.advance(Duration::from_secs(10));
        assert!(!container.interact(Command::Idle));
        assert_eq!(container.index(), Some(0), "Exactly the timeout is not idle yet");

        clock.advance(Duration::from_millis(1));
        assert!(!container.interact(Command::Idle), "Idle is never consumed");
        assert_eq!(container.index(), None);
    }

    #[test]
    fn test_idle_exits_activated_child() {
        let clock = Rc::new(ManualClock::new());
        let recorders = [Recorder::new(Size::new(20, 10))];
        let mut container = container_with(&recorders).with_clock(clock.clone());

        container.interact(Command::Next);
        container.interact(Command::Enter);
        recorders[0].clear();
        clock.advance(Duration::from_secs(11));
        container.interact(Command::Idle);

        assert!(!container.is_active());
        assert_eq!(
            recorders[0].events(),
            vec![Event::Deactivate, Event::Exit, Event::Deselect, Event::Blur]
        );
    }

    #[test]
    fn test_idle_does_not_reset_timer() {
        let clock = Rc::new(ManualClock::new());
        let recorders = [Recorder::new(Size::new(20, 10))];
        let mut container = container_with(&recorders)
            .with_clock(clock.clone())
            .with_timeout(Duration::from_secs(5));

        container.interact(Command::Next);
        for _ in 0..3 {
            clock.advance(Duration::from_secs(2));
            container.interact(Command::Idle);
        }
        assert_eq!(container.index(), None, "Idle ticks must not count as input");
    }

    #[test]
    fn test_draw_reports_visibility_transitions() {
        let recorders = [
            Recorder::new(Size::new(20, 10)),
            Recorder::new(Size::new(20, 10)),
            Recorder::new(Size::new(20, 10)),
        ];
        let mut container = Container::<8>::new(Size::new(20, 20)).with_layout(Layout::VList(2));
        for recorder in &recorders {
            container.add_child(recorder.clone()).unwrap();
        }

        let mut fb = FrameBuffer::new(Size::new(20, 20));
        let mut ctx = Context::new(&mut fb);
        container.draw(&mut ctx);
        container.draw(&mut ctx);

        assert_eq!(recorders[0].events(), vec![Event::Visible(true)]);
        assert_eq!(recorders[1].events(), vec![Event::Visible(true)]);
        assert!(
            recorders[2].events().is_empty(),
            "Layout stops once the next position leaves the region"
        );
        assert_eq!(recorders[0].draws(), 2);
        assert_eq!(recorders[1].draws(), 2);
    }

    #[test]
    fn test_draw_skips_clipped_children() {
        let recorders = [Recorder::new(Size::new(20, 10)), Recorder::new(Size::new(20, 10))];
        let mut container = Container::<8>::new(Size::new(20, 40)).with_layout(Layout::VList(2));
        for recorder in &recorders {
            container.add_child(recorder.clone()).unwrap();
        }

        // Framebuffer clip is only 12px tall
        let mut fb = FrameBuffer::new(Size::new(20, 12));
        let mut ctx = Context::new(&mut fb);
        container.draw(&mut ctx);

        assert_eq!(recorders[0].draws(), 1);
        assert_eq!(recorders[1].draws(), 0);
        assert_eq!(recorders[1].events(), vec![Event::Visible(false)]);
    }
}
