// src/ui/components/gauge.rs
//! Editable numeric gauge

use core::fmt::{Display, Write};

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use heapless::String;
use log::debug;

use crate::ui::binding::Binding;
use crate::ui::components::text::{LABEL_CAPACITY, TextSize};
use crate::ui::components::{draw_frame, draw_text, draw_text_at, truncate};
use crate::ui::context::Context;
use crate::ui::core::{ActivationHandler, Command, ExitHandler, SelectHandler, Widget, WidgetBase};
use crate::ui::styling::ColorPalette;

/// Track thickness of the bar, in pixels
const TRACK: u32 = 4;

/// Values a [`Gauge`] can edit
pub trait Numeric: Copy + PartialOrd + Display + 'static {
    /// `self + step`, or `self - step` when `up` is false, saturating at the
    /// type's bounds
    fn step(self, step: Self, up: bool) -> Self;

    /// Position of `self` between `min` and `max` as `0.0..=1.0`
    fn fraction(self, min: Self, max: Self) -> f32;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn step(self, step: Self, up: bool) -> Self {
                    if up {
                        self.saturating_add(step)
                    } else {
                        self.saturating_sub(step)
                    }
                }

                fn fraction(self, min: Self, max: Self) -> f32 {
                    if max <= min {
                        return 0.0;
                    }
                    ((self as f32 - min as f32) / (max as f32 - min as f32)).clamp(0.0, 1.0)
                }
            }
        )*
    };
}

impl_numeric_int!(i32, u8, u16);

impl Numeric for f32 {
    fn step(self, step: Self, up: bool) -> Self {
        if up { self + step } else { self - step }
    }

    fn fraction(self, min: Self, max: Self) -> f32 {
        if max <= min {
            return 0.0;
        }
        ((self - min) / (max - min)).clamp(0.0, 1.0)
    }
}

/// Direction the bar fills in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Taller-than-wide regions fill bottom to top.
    pub fn for_size(size: Size) -> Self {
        if size.height > size.width {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }
}

/// Bar gauge editing a bound number within `[min, max]`.
///
/// The edited value is staged: it is loaded from the binding when the gauge
/// gets selected, changed by the arrow commands (long presses use the large
/// step), written back on `Enter` and discarded on `Esc`, `Back` or when the
/// container exits the gauge.
///
/// # Examples
/// ```ignore
/// let brightness = Gauge::new(Size::new(120, 14), "Bright", level.clone(), 0u8, 100, 1)
///     .with_steps(1, 10);
/// ```
pub struct Gauge<T: Numeric> {
    base: WidgetBase,
    label: String<LABEL_CAPACITY>,
    value: Binding<T>,
    staged: T,
    min: T,
    max: T,
    step: T,
    large_step: T,
    orientation: Orientation,
    editing: bool,
    palette: ColorPalette,
}

impl<T: Numeric> Gauge<T> {
    /// Create a gauge with both steps set to `step`.
    pub fn new(size: Size, label: &str, value: Binding<T>, min: T, max: T, step: T) -> Self {
        let staged = clamp(value.get(), min, max);
        Self {
            base: WidgetBase::new(size),
            label: truncate(label),
            value,
            staged,
            min,
            max,
            step,
            large_step: step,
            orientation: Orientation::for_size(size),
            editing: false,
            palette: ColorPalette::default(),
        }
    }

    pub fn with_steps(mut self, step: T, large_step: T) -> Self {
        self.step = step;
        self.large_step = large_step;
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn staged(&self) -> T {
        self.staged
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn commit(&mut self) {
        self.value.set(self.staged);
        debug!("Gauge '{}' committed {}", self.label, self.staged);
    }

    pub fn revert(&mut self) {
        self.staged = clamp(self.value.get(), self.min, self.max);
    }

    fn nudge(&mut self, large: bool, up: bool) {
        let step = if large { self.large_step } else { self.step };
        self.staged = clamp(self.staged.step(step, up), self.min, self.max);
    }

    fn bar_rects(&self, origin: Point) -> (Rectangle, Rectangle) {
        let size = self.base.size;
        let fraction = self.staged.fraction(self.min, self.max);
        match self.orientation {
            Orientation::Horizontal => {
                let track = Rectangle::new(
                    origin + Point::new(2, size.height as i32 - TRACK as i32 - 2),
                    Size::new(size.width.saturating_sub(4), TRACK),
                );
                let filled = (track.size.width as f32 * fraction) as u32;
                (track, Rectangle::new(track.top_left, Size::new(filled, TRACK)))
            }
            Orientation::Vertical => {
                let track = Rectangle::new(
                    origin + Point::new(size.width as i32 / 2 - TRACK as i32 / 2, 2),
                    Size::new(TRACK, size.height.saturating_sub(4)),
                );
                let filled = (track.size.height as f32 * fraction) as u32;
                let top = track.top_left + Point::new(0, (track.size.height - filled) as i32);
                (track, Rectangle::new(top, Size::new(TRACK, filled)))
            }
        }
    }
}

fn clamp<T: Numeric>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

impl<T: Numeric> Widget for Gauge<T> {
    fn size(&self) -> Size {
        self.base.size
    }

    fn draw(&mut self, ctx: &mut Context<'_>) {
        let size = self.base.size;
        let fill = if self.editing {
            self.palette.active
        } else {
            self.palette.background
        };
        let outline = self.base.selected.then_some(self.palette.highlight);
        draw_frame(ctx, size, fill, outline);

        let (track, bar) = self.bar_rects(ctx.display_pos());
        {
            let mut canvas = ctx.canvas();
            track
                .into_styled(PrimitiveStyle::with_fill(self.palette.surface))
                .draw(&mut canvas)
                .ok();
            bar.into_styled(PrimitiveStyle::with_fill(self.palette.highlight))
                .draw(&mut canvas)
                .ok();
        }

        if self.orientation == Orientation::Horizontal {
            let text_row = Size::new(size.width, size.height.saturating_sub(TRACK + 2));
            draw_text(ctx, text_row, &self.label, TextSize::Small, self.palette.text);

            let mut value: String<16> = String::new();
            write!(value, "{}", self.staged).ok();
            let at = Point::new(size.width as i32 * 2 / 3, text_row.height as i32 / 2);
            draw_text_at(ctx, at, &value, TextSize::Small, self.palette.text_muted);
        }
    }

    fn interact(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Enter => self.commit(),
            Command::Esc | Command::Back => self.revert(),
            _ => match cmd.direction() {
                Some(step) => self.nudge(cmd.is_long(), step > 0),
                None => return self.base.interact(cmd),
            },
        }
        true
    }

    fn set_selected(&mut self, selected: bool) {
        self.base.selected = selected;
    }

    fn is_selected(&self) -> bool {
        self.base.selected
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
}

impl<T: Numeric> ActivationHandler for Gauge<T> {
    fn on_activate(&mut self) {
        self.editing = true;
    }

    fn on_deactivate(&mut self) {
        self.editing = false;
    }
}

impl<T: Numeric> SelectHandler for Gauge<T> {
    fn on_select(&mut self) {
        self.revert();
    }

    fn on_deselect(&mut self) {}
}

impl<T: Numeric> ExitHandler for Gauge<T> {
    fn on_exit(&mut self) {
        self.revert();
    }
}
