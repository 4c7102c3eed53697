//! Drawing context threaded through a render pass
//!
//! A [`Context`] pairs the framebuffer with a [`Cursor`]: the region a widget
//! owns (display-space origin and size), the layout position inside that
//! region and the clip rectangle inherited from every enclosing container.
//! Containers derive a fresh context per child, so widgets always draw at
//! [`Context::display_pos`] without knowing where their parents sit.

use embedded_graphics::draw_target::{Clipped, DrawTargetExt};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::framebuffer::FrameBuffer;

/// Extent used for measuring passes that must never hit a bound.
pub const UNBOUNDED: u32 = 0x7FFF;

/// Position and clip state of one region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    origin: Point,
    size: Size,
    pos: Point,
    clip: Rectangle,
    /// Position where the current layout pass started
    anchor: Point,
    /// Tallest row or widest column seen since the last wrap
    line: u32,
}

impl Cursor {
    pub fn new(origin: Point, size: Size) -> Self {
        Self {
            origin,
            size,
            pos: Point::zero(),
            clip: Rectangle::new(origin, size),
            anchor: Point::zero(),
            line: 0,
        }
    }

    /// A cursor large enough that no layout step ever fails.
    pub fn unbounded() -> Self {
        Self::new(Point::zero(), Size::new(UNBOUNDED, UNBOUNDED))
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn clip(&self) -> Rectangle {
        self.clip
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn set_line(&mut self, line: u32) {
        self.line = line;
    }

    /// Display-space coordinate of the current position
    pub fn display_pos(&self) -> Point {
        self.origin + self.pos
    }

    /// Move to a local position.
    ///
    /// Returns false, leaving the position unchanged, when the target lies
    /// outside the region.
    pub fn set_pos(&mut self, pos: Point) -> bool {
        if pos.x < 0
            || pos.y < 0
            || pos.x > self.size.width as i32
            || pos.y > self.size.height as i32
        {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn add_pos(&mut self, delta: Point) -> Point {
        self.pos += delta;
        self.pos
    }

    /// Start a new layout pass at `pos`, resetting per-pass line state.
    pub fn begin(&mut self, pos: Point) {
        self.pos = pos;
        self.anchor = pos;
        self.line = 0;
    }

    /// Region of `size` at the current position, clipped by this region.
    pub fn child(&self, size: Size) -> Cursor {
        let origin = self.display_pos();
        Cursor {
            origin,
            size,
            pos: Point::zero(),
            clip: intersection(self.clip, Rectangle::new(origin, size)),
            anchor: Point::zero(),
            line: 0,
        }
    }

    /// Region for scrolled content.
    ///
    /// The viewport of `viewport` size sits at the current position and
    /// becomes the clip; content spanning `span` is shifted by `-offset`.
    pub fn scrolled(&self, viewport: Size, span: Size, offset: Point) -> Cursor {
        let at = self.display_pos();
        Cursor {
            origin: at - offset,
            size: span,
            pos: Point::zero(),
            clip: intersection(self.clip, Rectangle::new(at, viewport)),
            anchor: Point::zero(),
            line: 0,
        }
    }

    /// Whether a box of `size` at the current position overlaps the clip.
    pub fn is_visible(&self, size: Size) -> bool {
        overlaps(Rectangle::new(self.display_pos(), size), self.clip)
    }
}

/// Strict overlap test; touching edges do not count.
pub fn overlaps(a: Rectangle, b: Rectangle) -> bool {
    let a_x1 = a.top_left.x + a.size.width as i32;
    let a_y1 = a.top_left.y + a.size.height as i32;
    let b_x1 = b.top_left.x + b.size.width as i32;
    let b_y1 = b.top_left.y + b.size.height as i32;

    a.top_left.x < b_x1 && a_x1 > b.top_left.x && a.top_left.y < b_y1 && a_y1 > b.top_left.y
}

fn intersection(a: Rectangle, b: Rectangle) -> Rectangle {
    let min_x = a.top_left.x.max(b.top_left.x);
    let min_y = a.top_left.y.max(b.top_left.y);
    let max_x = (a.top_left.x + a.size.width as i32).min(b.top_left.x + b.size.width as i32);
    let max_y = (a.top_left.y + a.size.height as i32).min(b.top_left.y + b.size.height as i32);

    Rectangle::new(
        Point::new(min_x, min_y),
        Size::new((max_x - min_x).max(0) as u32, (max_y - min_y).max(0) as u32),
    )
}

/// Framebuffer plus the cursor of the region being drawn
pub struct Context<'a> {
    target: &'a mut FrameBuffer,
    cursor: Cursor,
}

impl<'a> Context<'a> {
    /// Root context covering the whole framebuffer.
    pub fn new(target: &'a mut FrameBuffer) -> Self {
        let cursor = Cursor::new(Point::zero(), target.size());
        Self { target, cursor }
    }

    /// Derive a context sharing the target with an explicit cursor.
    pub fn with_cursor(&mut self, cursor: Cursor) -> Context<'_> {
        Context {
            target: &mut *self.target,
            cursor,
        }
    }

    /// Derive a context for a child of `size` at the current position.
    pub fn clone_for(&mut self, size: Size) -> Context<'_> {
        let cursor = self.cursor.child(size);
        self.with_cursor(cursor)
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    pub fn size(&self) -> Size {
        self.cursor.size()
    }

    pub fn display_pos(&self) -> Point {
        self.cursor.display_pos()
    }

    /// Display-space rectangle of `size` at the current position.
    pub fn bounds(&self, size: Size) -> Rectangle {
        Rectangle::new(self.display_pos(), size)
    }

    /// Draw target restricted to the inherited clip rectangle.
    pub fn canvas(&mut self) -> Clipped<'_, FrameBuffer> {
        let clip = self.cursor.clip();
        self.target.clipped(&clip)
    }
}
