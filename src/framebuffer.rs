//! RAM framebuffer with change detection.
//!
//! Every widget draws into this buffer instead of the display. After a
//! render pass only the rectangle containing changed pixels is flushed to
//! the real display in a single `fill_contiguous` call.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

/// Bounding box of pixels that have changed since the last flush.
#[derive(Debug, Clone, Copy)]
struct DirtyRect {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl DirtyRect {
    fn expand(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn from_point(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn to_rectangle(self) -> Rectangle {
        Rectangle::new(
            Point::new(self.min_x as i32, self.min_y as i32),
            Size::new(
                (self.max_x - self.min_x + 1) as u32,
                (self.max_y - self.min_y + 1) as u32,
            ),
        )
    }
}

/// Heap-backed framebuffer implementing `DrawTarget<Color = Rgb565>`.
///
/// The buffer is sized at runtime so the same widget tree can target
/// different panels. Drawing outside the buffer is silently discarded.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb565>,
    dirty: Option<DirtyRect>,
}

impl FrameBuffer {
    /// Allocate a framebuffer of the given size filled with black pixels.
    pub fn new(size: Size) -> Self {
        let width = size.width as usize;
        let height = size.height as usize;
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; width * height],
            dirty: None,
        }
    }

    /// Read back a pixel, `None` when the coordinate is off-buffer.
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Area that would be sent by the next [`flush`](Self::flush).
    pub fn dirty_area(&self) -> Option<Rectangle> {
        self.dirty.map(DirtyRect::to_rectangle)
    }

    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        let idx = y * self.width + x;
        if self.pixels[idx] != color {
            self.pixels[idx] = color;
            match &mut self.dirty {
                Some(rect) => rect.expand(x, y),
                None => self.dirty = Some(DirtyRect::from_point(x, y)),
            }
        }
    }

    /// Flush the dirty region to a display, then reset the dirty state.
    ///
    /// If nothing changed, this is a no-op.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(rect) = self.dirty.take() else {
            return Ok(());
        };

        let area = rect.to_rectangle();
        let width = area.size.width as usize;

        debug!(
            "Flushing {}x{} dirty region at ({}, {})",
            area.size.width, area.size.height, rect.min_x, rect.min_y
        );

        // Borrow the pixel slice so the closure captures a shared reference
        let pixels = &self.pixels;
        let stride = self.width;
        let pixel_iter = (rect.min_y..=rect.max_y).flat_map(move |y| {
            let row_start = y * stride + rect.min_x;
            pixels[row_start..row_start + width].iter().copied()
        });

        display.fill_contiguous(&area, pixel_iter)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            let x = coord.x;
            let y = coord.y;
            if x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height {
                self.set_pixel(x as usize, y as usize, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let w = self.width;
        let h = self.height;

        let x_start = (area.top_left.x.max(0) as usize).min(w);
        let y_start = (area.top_left.y.max(0) as usize).min(h);
        let x_end = ((area.top_left.x + area.size.width as i32).max(0) as usize).min(w);
        let y_end = ((area.top_left.y + area.size.height as i32).max(0) as usize).min(h);

        for y in y_start..y_end {
            for x in x_start..x_end {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        for y in 0..self.height {
            for x in 0..self.width {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_new_buffer_is_clean() {
        let fb = FrameBuffer::new(Size::new(8, 4));
        assert_eq!(fb.size(), Size::new(8, 4));
        assert!(fb.dirty_area().is_none(), "Fresh buffer has nothing to flush");
        assert_eq!(fb.pixel(Point::new(7, 3)), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(Point::new(8, 0)), None);
    }

    #[test]
    fn test_dirty_area_tracks_changes_only() {
        let mut fb = FrameBuffer::new(Size::new(16, 16));
        fb.fill_solid(&Rectangle::new(Point::new(2, 3), Size::new(4, 2)), Rgb565::RED)
            .unwrap();
        // Writing black over black is not a change
        fb.fill_solid(&Rectangle::new(Point::new(10, 10), Size::new(3, 3)), Rgb565::BLACK)
            .unwrap();

        assert_eq!(
            fb.dirty_area(),
            Some(Rectangle::new(Point::new(2, 3), Size::new(4, 2)))
        );
    }

    #[test]
    fn test_out_of_bounds_pixels_are_dropped() {
        let mut fb = FrameBuffer::new(Size::new(4, 4));
        fb.draw_iter([
            Pixel(Point::new(-1, 0), Rgb565::WHITE),
            Pixel(Point::new(4, 1), Rgb565::WHITE),
            Pixel(Point::new(1, 1), Rgb565::WHITE),
        ])
        .unwrap();

        assert_eq!(fb.pixel(Point::new(1, 1)), Some(Rgb565::WHITE));
        assert_eq!(
            fb.dirty_area(),
            Some(Rectangle::new(Point::new(1, 1), Size::new(1, 1)))
        );
    }

    #[test]
    fn test_flush_clears_dirty_state() {
        let mut fb = FrameBuffer::new(Size::new(4, 4));
        fb.fill_solid(&Rectangle::new(Point::new(1, 1), Size::new(2, 2)), Rgb565::GREEN)
            .unwrap();

        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        fb.flush(&mut display).unwrap();

        assert!(fb.dirty_area().is_none(), "Flush must reset the dirty rect");
        assert_eq!(display.get_pixel(Point::new(1, 1)), Some(Rgb565::GREEN));
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
    }
}
