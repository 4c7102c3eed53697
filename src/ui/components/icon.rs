// src/ui/components/icon.rs
//! Monochrome bitmap icon

use embedded_graphics::image::{GetPixel, ImageRaw};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::ui::components::draw_frame;
use crate::ui::context::Context;
use crate::ui::core::{Command, Selectable, Widget, WidgetBase};
use crate::ui::styling::ColorPalette;

/// 1 bit per pixel image centred in its region.
///
/// Set pixels are drawn in the palette's text color over the background.
///
/// # Examples
/// ```ignore
/// const BELL: ImageRaw<BinaryColor> = ImageRaw::new(&BELL_DATA, 8);
/// let icon = Icon::new(Size::new(12, 12), BELL);
/// ```
pub struct Icon {
    base: WidgetBase,
    image: ImageRaw<'static, BinaryColor>,
    selectable: bool,
    palette: ColorPalette,
}

impl Icon {
    pub fn new(size: Size, image: ImageRaw<'static, BinaryColor>) -> Self {
        Self {
            base: WidgetBase::new(size),
            image,
            selectable: true,
            palette: ColorPalette::default(),
        }
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn non_selectable(mut self) -> Self {
        self.selectable = false;
        self
    }

    pub fn set_image(&mut self, image: ImageRaw<'static, BinaryColor>) {
        self.image = image;
    }

    /// Offset of the image inside the region
    fn inset(&self) -> Point {
        let image = self.image.size();
        let size = self.base.size;
        Point::new(
            (size.width.saturating_sub(image.width) / 2) as i32,
            (size.height.saturating_sub(image.height) / 2) as i32,
        )
    }
}

impl Widget for Icon {
    fn size(&self) -> Size {
        self.base.size
    }

    fn draw(&mut self, ctx: &mut Context<'_>) {
        let outline = self.base.selected.then_some(self.palette.highlight);
        draw_frame(ctx, self.base.size, self.palette.background, outline);

        let origin = ctx.display_pos() + self.inset();
        let image = &self.image;
        let Size { width, height } = image.size();
        let color = self.palette.text;
        let pixels = (0..height as i32)
            .flat_map(|y| (0..width as i32).map(move |x| Point::new(x, y)))
            .filter(|&p| image.pixel(p) == Some(BinaryColor::On))
            .map(|p| Pixel(origin + p, color));
        ctx.canvas().draw_iter(pixels).ok();
    }

    fn interact(&mut self, cmd: Command) -> bool {
        self.base.interact(cmd)
    }

    fn set_selected(&mut self, selected: bool) {
        self.base.selected = selected;
    }

    fn is_selected(&self) -> bool {
        self.base.selected
    }

    fn as_selectable(&self) -> Option<&dyn Selectable> {
        Some(self)
    }
}

impl Selectable for Icon {
    fn can_select(&self) -> bool {
        self.selectable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    // Two rows of eight pixels: top left and bottom right set
    const CORNERS: [u8; 2] = [0b1000_0000, 0b0000_0001];

    #[test]
    fn test_set_pixels_use_text_color() {
        let palette = ColorPalette::default();
        let mut icon = Icon::new(Size::new(8, 2), ImageRaw::new(&CORNERS, 8));
        let mut fb = FrameBuffer::new(Size::new(8, 2));
        icon.draw(&mut Context::new(&mut fb));

        assert_eq!(fb.pixel(Point::new(0, 0)), Some(palette.text));
        assert_eq!(fb.pixel(Point::new(7, 1)), Some(palette.text));
        assert_eq!(fb.pixel(Point::new(3, 0)), Some(palette.background));
    }

    #[test]
    fn test_image_is_centred() {
        let palette = ColorPalette::default();
        let mut icon = Icon::new(Size::new(12, 6), ImageRaw::new(&CORNERS, 8));
        let mut fb = FrameBuffer::new(Size::new(12, 6));
        icon.draw(&mut Context::new(&mut fb));

        assert_eq!(fb.pixel(Point::new(2, 2)), Some(palette.text));
        assert_eq!(fb.pixel(Point::new(9, 3)), Some(palette.text));
        assert_eq!(fb.pixel(Point::new(0, 0)), Some(palette.background));
    }
}
