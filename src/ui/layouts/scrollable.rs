// src/ui/layouts/scrollable.rs
//! Scrollable container for content that exceeds visible bounds

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::time::Duration;

use embedded_graphics::prelude::*;
use log::trace;

use crate::error::Result;
use crate::ui::binding::Clock;
use crate::ui::context::Context;
use crate::ui::core::{Command, Navigable, Scrollable, Widget};
use crate::ui::layouts::container::Container;
use crate::ui::layouts::strategy::Layout;
use crate::ui::styling::Padding;

/// Offset change reported to scroll observers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollChange {
    /// Actual horizontal movement after clamping
    pub dx: i32,
    /// Actual vertical movement after clamping
    pub dy: i32,
    pub offset_x: i32,
    pub offset_y: i32,
}

/// Listener for offset changes of a [`Scroll`]
pub trait ScrollObserver {
    fn on_scroll_change(&mut self, change: &ScrollChange);
}

impl<F: FnMut(&ScrollChange)> ScrollObserver for F {
    fn on_scroll_change(&mut self, change: &ScrollChange) {
        self(change)
    }
}

/// Container whose children are drawn through a viewport at a scroll offset.
///
/// The widget size is the viewport. The content size is measured from the
/// children's layout on demand, so children added through
/// [`container_mut`](Self::container_mut) are reachable too; the offset is
/// kept within `[0, content - viewport]` on each axis.
pub struct Scroll<const N: usize> {
    container: Container<N>,
    offset: Point,
    observers: Vec<Box<dyn ScrollObserver>>,
}

impl<const N: usize> Scroll<N> {
    pub fn new(viewport: Size) -> Self {
        Self {
            container: Container::new(viewport),
            offset: Point::zero(),
            observers: Vec::new(),
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.container = self.container.with_layout(layout);
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.container = self.container.with_padding(padding);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.container = self.container.with_timeout(timeout);
        self
    }

    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.container = self.container.with_clock(clock);
        self
    }

    pub fn add_child<W: Widget + 'static>(&mut self, widget: W) -> Result<usize> {
        self.container.add_child(widget)
    }

    pub fn with_child<W: Widget + 'static>(mut self, widget: W) -> Result<Self> {
        self.add_child(widget)?;
        Ok(self)
    }

    pub fn add_observer<O: ScrollObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Extent of the laid out children, or the viewport without a layout.
    pub fn content_size(&self) -> Size {
        match self.container.layout() {
            Some(_) => self.container.content_size(),
            None => self.viewport(),
        }
    }

    pub fn viewport(&self) -> Size {
        self.container.size()
    }

    pub fn container(&self) -> &Container<N> {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut Container<N> {
        &mut self.container
    }

    pub fn len(&self) -> usize {
        self.container.len()
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    pub fn index(&self) -> Option<usize> {
        self.container.index()
    }

    pub fn is_active(&self) -> bool {
        self.container.is_active()
    }

    pub fn set_index(&mut self, index: Option<usize>) {
        self.container.set_index(index);
    }

    pub fn set_active(&mut self, index: Option<usize>) {
        self.container.set_active(index);
    }

    /// Move the offset by a delta, clamped per axis.
    ///
    /// Observers and scroll handlers of the children are only told about
    /// actual changes.
    pub fn scroll(&mut self, dx: i32, dy: i32) -> bool {
        if dx == 0 && dy == 0 {
            return false;
        }
        let target = self.clamp(self.offset + Point::new(dx, dy));
        if target == self.offset {
            return false;
        }

        let change = ScrollChange {
            dx: target.x - self.offset.x,
            dy: target.y - self.offset.y,
            offset_x: target.x,
            offset_y: target.y,
        };
        self.offset = target;
        trace!("Scroll offset -> ({}, {})", target.x, target.y);

        for observer in self.observers.iter_mut() {
            observer.on_scroll_change(&change);
        }
        for child in self.container.children_mut() {
            if let Some(handler) = child.as_scroll_handler() {
                handler.on_scroll(target);
            }
        }
        true
    }

    /// Scroll to an absolute offset.
    pub fn set_offset(&mut self, offset: Point) -> bool {
        let delta = offset - self.offset;
        self.scroll(delta.x, delta.y)
    }

    /// Scroll by the smallest amount that brings child `index` fully into
    /// the viewport. Returns whether the offset changed.
    pub fn ensure_visible(&mut self, index: usize) -> bool {
        let Some(rect) = self.container.child_rect(index) else {
            return false;
        };
        let viewport = self.viewport();
        let dx = axis_delta(
            rect.top_left.x,
            rect.size.width,
            self.offset.x,
            viewport.width,
        );
        let dy = axis_delta(
            rect.top_left.y,
            rect.size.height,
            self.offset.y,
            viewport.height,
        );
        self.scroll(dx, dy)
    }

    fn clamp(&self, offset: Point) -> Point {
        let viewport = self.viewport();
        let content = self.content_size();
        let max_x = (content.width as i32 - viewport.width as i32).max(0);
        let max_y = (content.height as i32 - viewport.height as i32).max(0);
        Point::new(offset.x.clamp(0, max_x), offset.y.clamp(0, max_y))
    }
}

/// Minimal offset change along one axis that brings `[start, start + len)`
/// inside `[offset, offset + view)`.
fn axis_delta(start: i32, len: u32, offset: i32, view: u32) -> i32 {
    let end = start + len as i32;
    if start < offset {
        start - offset
    } else if end > offset + view as i32 {
        end - (offset + view as i32)
    } else {
        0
    }
}

impl<const N: usize> Widget for Scroll<N> {
    fn size(&self) -> Size {
        self.container.size()
    }

    fn draw(&mut self, ctx: &mut Context<'_>) {
        let viewport = self.viewport();
        let content = self.content_size();
        let span = Size::new(
            content.width.max(viewport.width),
            content.height.max(viewport.height),
        );
        let cursor = ctx.cursor().scrolled(viewport, span, self.offset);
        let mut inner = ctx.with_cursor(cursor);
        self.container.draw_children(&mut inner);
    }

    fn interact(&mut self, cmd: Command) -> bool {
        self.container.interact(cmd)
    }

    fn set_selected(&mut self, selected: bool) {
        self.container.set_selected(selected);
    }

    fn is_selected(&self) -> bool {
        self.container.is_selected()
    }

    fn as_scrollable(&mut self) -> Option<&mut dyn Scrollable> {
        Some(self)
    }

    fn as_navigable(&self) -> Option<&dyn Navigable> {
        Some(self)
    }

    fn as_navigable_mut(&mut self) -> Option<&mut dyn Navigable> {
        Some(self)
    }
}

impl<const N: usize> Scrollable for Scroll<N> {
    fn scroll(&mut self, dx: i32, dy: i32) -> bool {
        Scroll::scroll(self, dx, dy)
    }

    fn scroll_offset(&self) -> Point {
        self.offset
    }
}

impl<const N: usize> Navigable for Scroll<N> {
    fn index(&self) -> Option<usize> {
        self.container.index()
    }

    fn set_index(&mut self, index: Option<usize>) {
        self.container.set_index(index);
    }

    fn is_active(&self) -> bool {
        self.container.is_active()
    }

    fn set_active(&mut self, index: Option<usize>) {
        self.container.set_active(index);
    }

    fn deactivate(&mut self) {
        self.container.deactivate();
    }

    fn child_count(&self) -> usize {
        self.container.len()
    }

    fn child(&self, index: usize) -> Option<&dyn Widget> {
        self.container.get(index)
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Widget> {
        self.container.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::testing::{Event, Recorder};
    use alloc::vec;
    use core::cell::RefCell;

    fn list(viewport: Size, recorders: &[Recorder]) -> Scroll<8> {
        let mut scroll = Scroll::<8>::new(viewport).with_layout(Layout::VList(2));
        for recorder in recorders {
            scroll.add_child(recorder.clone()).unwrap();
        }
        scroll
    }

    #[test]
    fn test_offset_is_clamped() {
        let recorder = Recorder::new(Size::new(50, 50));
        let mut scroll = list(Size::new(20, 20), &[recorder]);
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();
        scroll.add_observer(move |c: &ScrollChange| sink.borrow_mut().push(*c));

        assert!(scroll.scroll(15, 15));
        assert!(scroll.scroll(100, 100));
        assert_eq!(scroll.offset(), Point::new(30, 30), "Clamped to content - viewport");
        assert_eq!(
            changes.borrow()[1],
            ScrollChange {
                dx: 15,
                dy: 15,
                offset_x: 30,
                offset_y: 30
            },
            "Observers see the actual delta"
        );

        assert!(!scroll.scroll(5, 5), "Already at the end");
        assert!(scroll.scroll(-100, 0));
        assert_eq!(scroll.offset(), Point::new(0, 30));
        assert_eq!(changes.borrow().len(), 3);
    }

    #[test]
    fn test_zero_delta_is_not_a_change() {
        let recorder = Recorder::new(Size::new(20, 50));
        let mut scroll = list(Size::new(20, 20), &[recorder.clone()]);

        assert!(!scroll.scroll(0, 0));
        assert!(!scroll.scroll(4, 0), "Horizontal axis has no room");
        assert!(
            !recorder.events().contains(&Event::Scroll(Point::zero())),
            "No scroll notification without a change"
        );
    }

    #[test]
    fn test_children_hear_offset_changes() {
        let recorders = [Recorder::new(Size::new(20, 10)), Recorder::new(Size::new(20, 10))];
        let mut scroll = list(Size::new(20, 10), &recorders);

        assert_eq!(scroll.content_size(), Size::new(20, 22));
        scroll.set_offset(Point::new(0, 12));
        assert_eq!(recorders[0].events(), vec![Event::Scroll(Point::new(0, 12))]);
        assert_eq!(recorders[1].events(), vec![Event::Scroll(Point::new(0, 12))]);
    }

    #[test]
    fn test_ensure_visible_minimal_delta() {
        let recorders = [
            Recorder::new(Size::new(20, 10)),
            Recorder::new(Size::new(20, 10)),
            Recorder::new(Size::new(20, 10)),
            Recorder::new(Size::new(20, 10)),
        ];
        let mut scroll = list(Size::new(20, 12), &recorders);
        assert_eq!(scroll.content_size(), Size::new(20, 46));

        assert!(scroll.ensure_visible(3));
        assert_eq!(scroll.offset(), Point::new(0, 34), "Trailing edge lands on the viewport end");
        assert!(!scroll.ensure_visible(3), "Already visible");

        assert!(scroll.ensure_visible(1));
        assert_eq!(scroll.offset(), Point::new(0, 12), "Leading edge lands on the viewport start");
    }

    #[test]
    fn test_draw_reaches_scrolled_children() {
        let recorders = [
            Recorder::new(Size::new(20, 10)),
            Recorder::new(Size::new(20, 10)),
            Recorder::new(Size::new(20, 10)),
            Recorder::new(Size::new(20, 10)),
        ];
        let mut scroll = list(Size::new(20, 12), &recorders);
        let mut fb = FrameBuffer::new(Size::new(20, 12));

        scroll.set_offset(Point::new(0, 34));
        let mut ctx = Context::new(&mut fb);
        scroll.draw(&mut ctx);

        assert_eq!(recorders[0].draws(), 0);
        assert_eq!(recorders[3].draws(), 1, "Child below the initial viewport is drawn");
        assert!(recorders[3].events().contains(&Event::Visible(true)));
    }

    #[test]
    fn test_children_added_through_container_are_reachable() {
        let mut scroll = list(Size::new(20, 12), &[Recorder::new(Size::new(20, 10))]);
        for _ in 0..3 {
            scroll
                .container_mut()
                .add_child(Recorder::new(Size::new(20, 10)))
                .unwrap();
        }

        assert_eq!(scroll.content_size(), Size::new(20, 46));
        assert!(scroll.ensure_visible(3));
        assert_eq!(scroll.offset(), Point::new(0, 34));
    }

    #[test]
    fn test_offset_stays_in_range_for_any_deltas() {
        let recorders = [Recorder::new(Size::new(50, 30)), Recorder::new(Size::new(35, 25))];
        let mut scroll = list(Size::new(24, 20), &recorders);
        let content = scroll.content_size();
        let max_x = (content.width as i32 - 24).max(0);
        let max_y = (content.height as i32 - 20).max(0);

        let deltas = [-7, 13, 0, 40, -3, 1, -90, 25, 9, -1, 200, -11];
        for (i, &dx) in deltas.iter().enumerate() {
            let dy = deltas[(i * 5 + 3) % deltas.len()];
            scroll.scroll(dx, dy);
            let offset = scroll.offset();
            assert!(
                (0..=max_x).contains(&offset.x) && (0..=max_y).contains(&offset.y),
                "Offset {:?} left the range after scroll({}, {})",
                offset,
                dx,
                dy
            );
        }
    }
}
