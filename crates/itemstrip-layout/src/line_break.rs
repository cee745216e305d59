//! Character-granular greedy line breaking.
//!
//! Lines are cut at grapheme cluster boundaries with no regard for words,
//! which suits CJK and mixed-script labels. Each candidate prefix of the
//! remaining text is measured, longest first, until one fits the budget.

use crate::error::MeasureError;
use crate::measure::TextMeasurer;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// One wrapped line and its measured width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrappedLine {
    /// Line text
    pub text: String,
    /// Measured width in pixels
    pub width: f32,
}

/// An item's text split into lines that fit a pixel budget.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WrappedItem {
    lines: Vec<WrappedLine>,
}

impl WrappedItem {
    /// The wrapped lines in order.
    #[must_use]
    pub fn lines(&self) -> &[WrappedLine] {
        &self.lines
    }

    /// Number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if there are no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line texts in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.text.as_str())
    }

    /// Concatenation of all lines.
    #[must_use]
    pub fn text(&self) -> String {
        self.texts().collect()
    }
}

/// Break `text` into lines no wider than `budget` pixels.
///
/// A budget of zero or less means there is no drawable space and yields no
/// lines. A single grapheme wider than the budget is emitted alone on its own
/// line, so the loop always advances.
///
/// # Errors
///
/// Propagates the measurer's failure unchanged.
pub fn break_lines<M: TextMeasurer + ?Sized>(
    text: &str,
    budget: f32,
    text_size: f32,
    measurer: &M,
) -> Result<WrappedItem, MeasureError> {
    if budget <= 0.0 || text.is_empty() {
        return Ok(WrappedItem::default());
    }

    // Byte offset just past each grapheme.
    let ends: Vec<usize> = text
        .grapheme_indices(true)
        .map(|(start, g)| start + g.len())
        .collect();

    let mut lines = Vec::new();
    let mut first = 0;
    let mut line_start = 0;

    while first < ends.len() {
        let mut last = ends.len();
        loop {
            let candidate = &text[line_start..ends[last - 1]];
            let width = measurer.measure_width(candidate, text_size)?;
            if width <= budget || last == first + 1 {
                lines.push(WrappedLine {
                    text: candidate.to_owned(),
                    width,
                });
                line_start = ends[last - 1];
                first = last;
                break;
            }
            last -= 1;
        }
    }

    tracing::trace!(
        graphemes = ends.len(),
        lines = lines.len(),
        budget,
        "wrapped item"
    );
    Ok(WrappedItem { lines })
}
