//! Layout strategies that advance a cursor between children
//!
//! A strategy is consulted once per child after it has been placed. It moves
//! the cursor to where the next child goes and returns false when the next
//! position falls outside the region, which ends the pass.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::context::Cursor;

/// Cursor-advancing function used by [`Layout::Custom`]
pub type LayoutFn = fn(&mut Cursor, Size) -> bool;

/// How a container places its children
#[derive(Debug, Clone, Copy)]
pub enum Layout {
    /// Left to right with the given gap
    HList(i32),
    /// Top to bottom with the given gap
    VList(i32),
    /// Rows wrapping at the region width, with horizontal and vertical gaps
    Grid { spacing: Point },
    /// Left to right, wrapping to a new row once `max_width` (or the region
    /// width when 0) is reached
    HFlow { spacing: i32, max_width: u32 },
    /// Top to bottom, wrapping to a new column once `max_height` (or the
    /// region height when 0) is reached
    VFlow { spacing: i32, max_height: u32 },
    /// Application supplied strategy
    Custom(LayoutFn),
}

impl Layout {
    /// Advance `cursor` past a child of `size`.
    pub fn advance(&self, cursor: &mut Cursor, size: Size) -> bool {
        let pos = cursor.pos();
        let w = size.width as i32;
        let h = size.height as i32;

        match *self {
            Layout::HList(gap) => cursor.set_pos(Point::new(pos.x + w + gap, pos.y)),
            Layout::VList(gap) => cursor.set_pos(Point::new(pos.x, pos.y + h + gap)),
            Layout::Grid { spacing } => {
                let row = cursor.line().max(size.height);
                let start_x = cursor.anchor().x;
                let width = cursor.size().width as i32;
                let mut next = Point::new(pos.x + w + spacing.x, pos.y);
                cursor.set_line(row);

                if width != 0 && next.x - start_x > width {
                    next = Point::new(start_x, pos.y + row as i32 + spacing.y);
                    cursor.set_line(0);
                }
                cursor.set_pos(next)
            }
            Layout::HFlow { spacing, max_width } => {
                let row = cursor.line().max(size.height);
                let start_x = cursor.anchor().x;
                let limit = if max_width == 0 {
                    cursor.size().width as i32
                } else {
                    max_width as i32
                };
                let mut next = Point::new(pos.x + w + spacing, pos.y);
                cursor.set_line(row);

                if limit > 0 && next.x - start_x >= limit {
                    next = Point::new(start_x, pos.y + row as i32 + spacing);
                    cursor.set_line(0);
                }
                cursor.set_pos(next)
            }
            Layout::VFlow {
                spacing,
                max_height,
            } => {
                let column = cursor.line().max(size.width);
                let start_y = cursor.anchor().y;
                let limit = if max_height == 0 {
                    cursor.size().height as i32
                } else {
                    max_height as i32
                };
                let mut next = Point::new(pos.x, pos.y + h + spacing);
                cursor.set_line(column);

                if limit > 0 && next.y - start_y >= limit {
                    next = Point::new(pos.x + column as i32 + spacing, start_y);
                    cursor.set_line(0);
                }
                cursor.set_pos(next)
            }
            Layout::Custom(advance) => advance(cursor, size),
        }
    }

    /// Lay out `sizes` from `start` with no bound and return the extent
    /// covered by the children (maximum of position plus size per axis).
    pub fn measure<I>(&self, start: Point, sizes: I) -> Size
    where
        I: IntoIterator<Item = Size>,
    {
        let mut cursor = Cursor::unbounded();
        cursor.begin(start);
        let mut extent = Point::zero();

        for size in sizes {
            let pos = cursor.pos();
            extent.x = extent.x.max(pos.x + size.width as i32);
            extent.y = extent.y.max(pos.y + size.height as i32);
            if !self.advance(&mut cursor, size) {
                break;
            }
        }

        Size::new(extent.x.max(0) as u32, extent.y.max(0) as u32)
    }

    /// Local rectangle of the child at `index` when laid out from `start`.
    pub fn rect_of<I>(&self, start: Point, sizes: I, index: usize) -> Option<Rectangle>
    where
        I: IntoIterator<Item = Size>,
    {
        let mut cursor = Cursor::unbounded();
        cursor.begin(start);

        for (i, size) in sizes.into_iter().enumerate() {
            if i == index {
                return Some(Rectangle::new(cursor.pos(), size));
            }
            if !self.advance(&mut cursor, size) {
                break;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn positions(layout: Layout, region: Size, sizes: &[Size]) -> Vec<Point> {
        let mut cursor = Cursor::new(Point::zero(), region);
        cursor.begin(Point::zero());
        let mut out = Vec::new();
        for &size in sizes {
            out.push(cursor.pos());
            if !layout.advance(&mut cursor, size) {
                break;
            }
        }
        out
    }

    #[test]
    fn test_vlist_positions() {
        let sizes = [Size::new(20, 10); 4];
        let layout = Layout::VList(2);

        assert_eq!(
            positions(layout, Size::new(20, 100), &sizes),
            [
                Point::new(0, 0),
                Point::new(0, 12),
                Point::new(0, 24),
                Point::new(0, 36)
            ]
        );
        assert_eq!(layout.measure(Point::zero(), sizes), Size::new(20, 46));
        assert_eq!(
            layout.rect_of(Point::zero(), sizes, 3),
            Some(Rectangle::new(Point::new(0, 36), Size::new(20, 10)))
        );
    }

    #[test]
    fn test_hlist_stops_outside_region() {
        let sizes = [Size::new(8, 8); 4];
        let placed = positions(Layout::HList(2), Size::new(18, 8), &sizes);
        assert_eq!(
            placed.len(),
            2,
            "Third position at x = 20 lies outside an 18px region"
        );
    }

    #[test]
    fn test_grid_wraps_rows() {
        let sizes = [Size::new(10, 6), Size::new(10, 8), Size::new(10, 6)];
        let placed = positions(
            Layout::Grid {
                spacing: Point::new(2, 1),
            },
            Size::new(20, 40),
            &sizes,
        );
        assert_eq!(
            placed,
            [Point::new(0, 0), Point::new(12, 0), Point::new(0, 9)],
            "Row height is the tallest child of the row"
        );
    }

    #[test]
    fn test_vflow_wraps_columns() {
        let sizes = [Size::new(6, 10), Size::new(4, 10), Size::new(6, 10)];
        let placed = positions(
            Layout::VFlow {
                spacing: 1,
                max_height: 20,
            },
            Size::new(40, 40),
            &sizes,
        );
        assert_eq!(
            placed,
            [Point::new(0, 0), Point::new(0, 11), Point::new(7, 0)]
        );
    }

    #[test]
    fn test_custom_strategy() {
        fn diagonal(cursor: &mut Cursor, size: Size) -> bool {
            let pos = cursor.pos();
            cursor.set_pos(pos + Point::new(size.width as i32, size.height as i32))
        }

        let rect = Layout::Custom(diagonal).rect_of(Point::new(1, 1), [Size::new(3, 3); 3], 2);
        assert_eq!(rect, Some(Rectangle::new(Point::new(7, 7), Size::new(3, 3))));
    }
}
