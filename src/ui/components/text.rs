// src/ui/components/text.rs
//! Text label widget

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_6X10, FONT_10X20};
use embedded_graphics::prelude::*;
use heapless::String;

use crate::ui::binding::Binding;
use crate::ui::components::{draw_frame, draw_text, truncate};
use crate::ui::context::Context;
use crate::ui::core::{Command, Selectable, Widget, WidgetBase};
use crate::ui::styling::ColorPalette;

/// Maximum number of bytes a label stores
pub const LABEL_CAPACITY: usize = 32;

/// Text size variants
///
/// Provides three preset text sizes with corresponding embedded-graphics fonts:
/// - `Small`: 5x8 font
/// - `Medium`: 6x10 font (default)
/// - `Large`: 10x20 font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl TextSize {
    pub fn font(&self) -> &'static MonoFont<'static> {
        match self {
            TextSize::Small => &FONT_5X8,
            TextSize::Medium => &FONT_6X10,
            TextSize::Large => &FONT_10X20,
        }
    }
}

/// Single line of text, either fixed or read from a binding at draw time.
///
/// Labels take part in focus traversal unless built with
/// [`non_selectable`](Self::non_selectable) and are highlighted while
/// selected.
///
/// # Examples
/// ```ignore
/// let title = Label::new(Size::new(120, 12), "Settings").non_selectable();
/// let status = Label::new(Size::new(120, 12), "").with_binding(status_text.clone());
/// ```
pub struct Label {
    base: WidgetBase,
    text: String<LABEL_CAPACITY>,
    binding: Option<Binding<&'static str>>,
    text_size: TextSize,
    selectable: bool,
    palette: ColorPalette,
}

impl Label {
    pub fn new(size: Size, text: &str) -> Self {
        Self {
            base: WidgetBase::new(size),
            text: truncate(text),
            binding: None,
            text_size: TextSize::default(),
            selectable: true,
            palette: ColorPalette::default(),
        }
    }

    pub fn with_text_size(mut self, text_size: TextSize) -> Self {
        self.text_size = text_size;
        self
    }

    /// Show whatever string the binding holds when drawn.
    pub fn with_binding(mut self, binding: Binding<&'static str>) -> Self {
        self.binding = Some(binding);
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Exclude the label from focus traversal.
    pub fn non_selectable(mut self) -> Self {
        self.selectable = false;
        self
    }

    /// Replace the fixed text; longer input is cut at a character boundary.
    pub fn set_text(&mut self, text: &str) {
        self.text = truncate(text);
    }

    pub fn text(&self) -> &str {
        match &self.binding {
            Some(binding) => binding.get(),
            None => &self.text,
        }
    }
}

impl Widget for Label {
    fn size(&self) -> Size {
        self.base.size
    }

    fn draw(&mut self, ctx: &mut Context<'_>) {
        let outline = self.base.selected.then_some(self.palette.highlight);
        draw_frame(ctx, self.base.size, self.palette.background, outline);

        let text = match &self.binding {
            Some(binding) => binding.get(),
            None => self.text.as_str(),
        };
        draw_text(ctx, self.base.size, text, self.text_size, self.palette.text);
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

impl Selectable for Label {
    fn can_select(&self) -> bool {
        self.selectable
    }
}
