//! Thumb label: renderer seam, change-tracking layer and a monospace
//! measurer for headless use.

/// Text drawing and measurement capability supplied by the host.
pub trait LabelRenderer {
    /// Replace the drawn text.
    fn set_text(&mut self, text: &str);

    /// Width `text` would occupy when drawn.
    fn measured_width(&self, text: &str) -> f32;
}

/// Render a value as plain decimal text, always with a fractional part
/// (`537.0`, `0.1`). No locale formatting.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}

/// Wraps a [`LabelRenderer`] and forwards text only when it changes, so
/// repeated identical values never trigger a redraw.
#[derive(Debug, Clone)]
pub struct LabelLayer<R> {
    renderer: R,
    text: Option<String>,
}

impl<R: LabelRenderer> LabelLayer<R> {
    /// Wrap `renderer`. No text has been set yet.
    #[must_use]
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            text: None,
        }
    }

    /// Update the text. Returns `true` if the renderer was told to redraw.
    pub fn set_text(&mut self, text: String) -> bool {
        if self.text.as_deref() == Some(text.as_str()) {
            return false;
        }
        self.renderer.set_text(&text);
        self.text = Some(text);
        true
    }

    /// Currently displayed text (empty before the first update).
    #[must_use]
    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    /// Measure `text` with the wrapped renderer.
    #[must_use]
    pub fn measured_width(&self, text: &str) -> f32 {
        self.renderer.measured_width(text)
    }

    /// The wrapped renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

/// Fixed-advance label measurer: every character is
/// `font_size * advance_ratio` wide.
#[derive(Debug, Clone, PartialEq)]
pub struct MonospaceLabel {
    font_size: f32,
    advance_ratio: f32,
    text: String,
    redraws: usize,
}

impl MonospaceLabel {
    /// Typical advance of a monospace glyph relative to its font size.
    pub const DEFAULT_ADVANCE_RATIO: f32 = 0.6;

    /// Measurer for the given font size.
    #[must_use]
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            advance_ratio: Self::DEFAULT_ADVANCE_RATIO,
            text: String::new(),
            redraws: 0,
        }
    }

    /// Override the glyph advance ratio.
    #[must_use]
    pub fn with_advance_ratio(mut self, ratio: f32) -> Self {
        self.advance_ratio = ratio;
        self
    }

    /// Last text drawn.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of redraws requested so far.
    #[must_use]
    pub fn redraws(&self) -> usize {
        self.redraws
    }
}

impl Default for MonospaceLabel {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl LabelRenderer for MonospaceLabel {
    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
        self.redraws += 1;
    }

    fn measured_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.font_size * self.advance_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_fraction() {
        assert_eq!(format_value(537.0), "537.0");
        assert_eq!(format_value(0.1), "0.1");
        assert_eq!(format_value(-2.5), "-2.5");
    }

    #[test]
    fn layer_skips_identical_text() {
        let mut layer = LabelLayer::new(MonospaceLabel::default());
        assert_eq!(layer.text(), "");
        assert!(layer.set_text("1.0".to_owned()));
        assert!(!layer.set_text("1.0".to_owned()));
        assert!(layer.set_text("2.0".to_owned()));
        assert_eq!(layer.renderer().redraws(), 2);
        assert_eq!(layer.renderer().text(), "2.0");
        assert_eq!(layer.text(), "2.0");
    }

    #[test]
    fn monospace_measurement() {
        let label = MonospaceLabel::new(10.0);
        assert!((label.measured_width("537.0") - 30.0).abs() < 1e-4);
        let wide = MonospaceLabel::new(10.0).with_advance_ratio(1.0);
        assert!((wide.measured_width("ab") - 20.0).abs() < 1e-4);
    }
}
