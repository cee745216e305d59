//! Text measurement capability supplied by the host rendering stack.

use crate::error::MeasureError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use unicode_width::UnicodeWidthStr;

/// Vertical font extents at a given text size.
///
/// `ascent` is measured upward from the baseline and is therefore zero or
/// negative; `descent` is zero or positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineMetrics {
    /// Distance from baseline to the top of the line box (<= 0)
    pub ascent: f32,
    /// Distance from baseline to the bottom of the line box (>= 0)
    pub descent: f32,
}

impl LineMetrics {
    /// Create new line metrics.
    #[must_use]
    pub const fn new(ascent: f32, descent: f32) -> Self {
        Self { ascent, descent }
    }

    /// Height of one line of text.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.descent - self.ascent
    }
}

/// Measures text for the layout engine.
///
/// Implementations must be deterministic for a given text and size; the
/// engine relies on this for idempotent layout passes.
pub trait TextMeasurer {
    /// Pixel width of `text` rendered at `text_size`.
    fn measure_width(&self, text: &str, text_size: f32) -> Result<f32, MeasureError>;

    /// Font line metrics at `text_size`.
    fn line_metrics(&self, text_size: f32) -> Result<LineMetrics, MeasureError>;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure_width(&self, text: &str, text_size: f32) -> Result<f32, MeasureError> {
        (**self).measure_width(text, text_size)
    }

    fn line_metrics(&self, text_size: f32) -> Result<LineMetrics, MeasureError> {
        (**self).line_metrics(text_size)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn measure_width(&self, text: &str, text_size: f32) -> Result<f32, MeasureError> {
        (**self).measure_width(text, text_size)
    }

    fn line_metrics(&self, text_size: f32) -> Result<LineMetrics, MeasureError> {
        (**self).line_metrics(text_size)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Arc<T> {
    fn measure_width(&self, text: &str, text_size: f32) -> Result<f32, MeasureError> {
        (**self).measure_width(text, text_size)
    }

    fn line_metrics(&self, text_size: f32) -> Result<LineMetrics, MeasureError> {
        (**self).line_metrics(text_size)
    }
}

/// A fixed-advance measurer for hosts without a font stack.
///
/// Width is the text's display column count (wide CJK glyphs count as two
/// columns) times `advance_em` times the text size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonospaceMeasurer {
    /// Advance of one display column, in em
    pub advance_em: f32,
    /// Ascent in em (<= 0)
    pub ascent_em: f32,
    /// Descent in em (>= 0)
    pub descent_em: f32,
}

impl MonospaceMeasurer {
    /// Create a measurer with explicit em proportions.
    #[must_use]
    pub const fn new(advance_em: f32, ascent_em: f32, descent_em: f32) -> Self {
        Self {
            advance_em,
            ascent_em,
            descent_em,
        }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(0.5, -0.75, 0.25)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure_width(&self, text: &str, text_size: f32) -> Result<f32, MeasureError> {
        Ok(text.width() as f32 * self.advance_em * text_size)
    }

    fn line_metrics(&self, text_size: f32) -> Result<LineMetrics, MeasureError> {
        Ok(LineMetrics::new(
            self.ascent_em * text_size,
            self.descent_em * text_size,
        ))
    }
}
