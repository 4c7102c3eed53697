// src/ui/components/separator.rs
//! Thin divider line between groups of widgets

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};

use crate::ui::components::gauge::Orientation;
use crate::ui::context::Context;
use crate::ui::core::{Command, Selectable, Widget, WidgetBase};
use crate::ui::styling::ColorPalette;

/// 1px line through the middle of its region.
///
/// Wider-than-tall regions get a horizontal line, taller ones a vertical
/// line. Separators never take focus.
pub struct Separator {
    base: WidgetBase,
    color: Rgb565,
    orientation: Orientation,
}

impl Separator {
    pub fn new(size: Size) -> Self {
        Self {
            base: WidgetBase::new(size),
            color: ColorPalette::default().border,
            orientation: Orientation::for_size(size),
        }
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = color;
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn line(&self, origin: Point) -> Line {
        let size = self.base.size;
        let (w, h) = (size.width as i32, size.height as i32);
        match self.orientation {
            Orientation::Horizontal => Line::new(
                origin + Point::new(0, h / 2),
                origin + Point::new(w - 1, h / 2),
            ),
            Orientation::Vertical => Line::new(
                origin + Point::new(w / 2, 0),
                origin + Point::new(w / 2, h - 1),
            ),
        }
    }
}

impl Widget for Separator {
    fn size(&self) -> Size {
        self.base.size
    }

    fn draw(&mut self, ctx: &mut Context<'_>) {
        if self.base.size.width == 0 || self.base.size.height == 0 {
            return;
        }
        self.line(ctx.display_pos())
            .into_styled(PrimitiveStyle::with_stroke(self.color, 1))
            .draw(&mut ctx.canvas())
            .ok();
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

impl Selectable for Separator {
    fn can_select(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::ui::core::is_selectable;

    #[test]
    fn test_orientation_follows_shape() {
        assert_eq!(
            Separator::new(Size::new(40, 3)).orientation(),
            Orientation::Horizontal
        );
        assert_eq!(
            Separator::new(Size::new(3, 40)).orientation(),
            Orientation::Vertical
        );
        assert!(!is_selectable(&Separator::new(Size::new(40, 3))));
    }

    #[test]
    fn test_line_through_the_middle() {
        let mut fb = FrameBuffer::new(Size::new(20, 20));
        let mut ctx = Context::new(&mut fb);
        Separator::new(Size::new(20, 5))
            .with_color(Rgb565::RED)
            .draw(&mut ctx);
        Separator::new(Size::new(5, 20))
            .with_color(Rgb565::GREEN)
            .draw(&mut ctx);

        assert_eq!(fb.pixel(Point::new(15, 2)), Some(Rgb565::RED));
        assert_eq!(fb.pixel(Point::new(2, 15)), Some(Rgb565::GREEN));
        assert_eq!(
            fb.pixel(Point::new(15, 0)),
            Some(Rgb565::BLACK),
            "Only the middle line is drawn"
        );
    }
}
