//! Font description and text metrics.
//!
//! Pageflow has no font shaping stack of its own; widgets only need
//! predictable metrics for layout (most importantly the action button's
//! width clamp). Measurement therefore uses a fixed average-advance
//! estimate derived from the point size, which keeps layout deterministic
//! across hosts regardless of which fonts are installed.

/// A font description used for measuring and drawing text.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Family name, resolved by the host renderer.
    family: String,
    /// Point size.
    size: f32,
}

/// Average glyph advance as a fraction of the point size.
const AVERAGE_ADVANCE: f32 = 0.55;

/// Line height as a fraction of the point size.
const LINE_HEIGHT: f32 = 1.2;

impl Font {
    /// Create a font with the given family and point size.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// The toolkit default UI font.
    pub fn default_ui() -> Self {
        Self::new("sans-serif", 17.0)
    }

    /// Get the family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Get the point size.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Estimate the rendered width of a single line of text.
    pub fn measure_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.size * AVERAGE_ADVANCE
    }

    /// Line height for a single line of text.
    pub fn line_height(&self) -> f32 {
        self.size * LINE_HEIGHT
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::default_ui()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_width_scales_with_length() {
        let font = Font::default_ui();
        let short = font.measure_width("Skip");
        let long = font.measure_width("Continue and Proceed");
        assert!(long > short);
        assert_eq!(font.measure_width(""), 0.0);
    }

    #[test]
    fn test_measure_width_counts_chars_not_bytes() {
        let font = Font::new("sans-serif", 10.0);
        assert_eq!(font.measure_width("äöü"), font.measure_width("abc"));
    }

    #[test]
    fn test_line_height_exceeds_size() {
        let font = Font::new("sans-serif", 20.0);
        assert!(font.line_height() > font.size());
    }
}
