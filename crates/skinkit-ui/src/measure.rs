use skinkit_core::{FontSpec, Size};
use unicode_segmentation::UnicodeSegmentation;

/// Text extents for layout, in px.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> Size;
}

/// Shapes with cosmic-text through `skinkit-text`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CosmicMeasure;

impl TextMeasure for CosmicMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        let e = skinkit_text::measure_line(text, font.size, &font.face);
        Size::new(e.width, e.height)
    }
}

/// Deterministic metrics: every grapheme advances by `advance * font px`,
/// every line is `line_height * font px` tall. For tests and headless hosts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedMeasure {
    pub advance: f32,
    pub line_height: f32,
}

impl Default for FixedMeasure {
    fn default() -> Self {
        Self {
            advance: 0.5,
            line_height: 1.25,
        }
    }
}

impl TextMeasure for FixedMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let widest = text
            .split('\n')
            .map(|line| line.graphemes(true).count())
            .max()
            .unwrap_or(0);
        let lines = text.split('\n').count();
        Size::new(
            (widest as f32 * self.advance * font.size).round(),
            (lines as f32 * self.line_height * font.size).round(),
        )
    }
}

/// Number of user-perceived characters in `text`.
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}
