// File: crates/accrue-core/src/text.rs
// Summary: Text measurement seam used to size the value label.

/// Measures rendered text width in pixels.
pub trait TextMeasure {
    fn measure_text(&self, text: &str, font_size: f32) -> f32;
}

/// Fixed advance per character, as a fraction of the font size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxTextMeasure {
    pub advance: f32,
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self { advance: 0.6 }
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size * self.advance
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for Box<T> {
    fn measure_text(&self, text: &str, font_size: f32) -> f32 {
        (**self).measure_text(text, font_size)
    }
}
