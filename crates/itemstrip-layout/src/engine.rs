//! Layout engine implementation.

use crate::config::StripConfig;
use crate::error::LayoutError;
use crate::geometry::{self, DividerRect};
use crate::line_break::{break_lines, WrappedItem};
use crate::measure::{LineMetrics, TextMeasurer};
use crate::normalize::normalize;
use itemstrip_core::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// How the host constrains one axis of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum MeasureSpec {
    /// The strip must be exactly this size
    Exact(f32),
    /// The strip may be at most this size
    AtMost(f32),
    /// No constraint
    #[default]
    Unspecified,
}

impl MeasureSpec {
    /// Resolve a content-derived size against this spec.
    fn resolve(self, content: f32) -> f32 {
        match self {
            Self::Exact(size) => size,
            Self::AtMost(max) => content.min(max),
            Self::Unspecified => content,
        }
    }
}

/// Geometry and text of one cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellLayout {
    /// Cell index, left to right
    pub index: usize,
    /// The item text assigned to this cell
    pub text: String,
    /// Outer cell box
    pub bounds: Rect,
    /// Drawable box (bounds minus padding)
    pub content: Rect,
    /// Wrapped lines at the rendering width
    pub wrapped: WrappedItem,
    /// Baseline start point of each wrapped line
    pub origins: Vec<Point>,
}

impl CellLayout {
    /// Wrapped lines paired with their draw origins.
    pub fn placed_lines(&self) -> impl Iterator<Item = (&str, Point)> {
        self.wrapped.texts().zip(self.origins.iter().copied())
    }
}

/// Render-ready result of one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripLayout {
    /// Total strip size
    pub size: Size,
    /// Width of every cell
    pub cell_width: f32,
    /// Font metrics at the configured text size
    pub metrics: LineMetrics,
    /// Per-cell geometry, in cell order
    pub cells: Vec<CellLayout>,
    /// Divider rectangles
    pub dividers: Vec<DividerRect>,
    /// Items wrapped at the reference width, when one is configured
    pub reference: Option<Vec<WrappedItem>>,
}

impl StripLayout {
    /// Number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Height of one line of text.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        self.metrics.line_height()
    }

    /// Outer box of every cell.
    #[must_use]
    pub fn cell_boxes(&self) -> Vec<Rect> {
        self.cells.iter().map(|c| c.bounds).collect()
    }

    /// Wrapped text of every cell.
    #[must_use]
    pub fn wrapped_items(&self) -> Vec<&WrappedItem> {
        self.cells.iter().map(|c| &c.wrapped).collect()
    }

    /// Line origins of every cell.
    #[must_use]
    pub fn line_origins(&self) -> Vec<&[Point]> {
        self.cells.iter().map(|c| c.origins.as_slice()).collect()
    }

    /// The line count that drove the strip height.
    #[must_use]
    pub fn max_lines(&self) -> usize {
        match &self.reference {
            Some(reference) => geometry::max_lines(reference),
            None => self
                .cells
                .iter()
                .map(|c| c.wrapped.line_count())
                .max()
                .unwrap_or(0),
        }
    }
}

/// Lays out item strips using a host-supplied text measurer.
///
/// The engine keeps nothing between passes: each call to
/// [`layout`](Self::layout) is a function of its arguments and the measurer.
#[derive(Debug, Clone, Default)]
pub struct StripLayoutEngine<M> {
    measurer: M,
}

impl<M: TextMeasurer> StripLayoutEngine<M> {
    /// Create a new layout engine.
    #[must_use]
    pub const fn new(measurer: M) -> Self {
        Self { measurer }
    }

    /// The measurer used for every pass.
    #[must_use]
    pub const fn measurer(&self) -> &M {
        &self.measurer
    }

    /// Compute the layout of `items` under `config`.
    ///
    /// # Errors
    ///
    /// Fails on an invalid configuration, on a measurer failure, and when no
    /// item width is configured and `width` is not [`MeasureSpec::Exact`].
    pub fn layout<S: AsRef<str>>(
        &self,
        config: &StripConfig,
        items: &[S],
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<StripLayout, LayoutError> {
        config.validate()?;

        let normalized = normalize(items, config.item_count);
        let count = normalized.count;

        let total_width = match (width, geometry::intrinsic_width(config, count)) {
            (MeasureSpec::Exact(w), _) => w,
            (spec, Some(intrinsic)) => spec.resolve(intrinsic),
            (mode, None) => return Err(LayoutError::UnresolvableWidth { mode }),
        };

        let cell_width = geometry::cell_width(config, total_width, count);
        let budget = geometry::wrap_budget(config, cell_width);
        if count > 0 && budget <= 0.0 {
            tracing::warn!(
                count,
                total_width,
                cell_width,
                "no drawable width, items will not be wrapped"
            );
        }

        let metrics = self.measurer.line_metrics(config.text_size)?;
        let wrapped = self.wrap_all(&normalized.items, budget, config.text_size)?;

        let reference = match config.ref_width {
            Some(ref_width) => {
                let ref_cell = geometry::cell_width(config, ref_width, count);
                let ref_budget = geometry::wrap_budget(config, ref_cell);
                Some(self.wrap_all(&normalized.items, ref_budget, config.text_size)?)
            }
            None => None,
        };

        let max_lines = geometry::max_lines(reference.as_deref().unwrap_or(&wrapped));
        let content_height = match config.item_height {
            Some(h) => config.frame.vertical() + h,
            None => geometry::auto_height(config, max_lines, metrics.line_height()),
        };
        let total_height = height.resolve(content_height);
        let size = Size::new(total_width, total_height);

        let cells: Vec<CellLayout> = normalized
            .items
            .into_iter()
            .zip(wrapped)
            .enumerate()
            .map(|(index, (text, wrapped))| {
                let bounds = geometry::cell_bounds(config, index, cell_width, total_height);
                let content = geometry::content_box(config, &bounds);
                let origins = geometry::line_origins(&wrapped, &content, config.gravity, &metrics);
                CellLayout {
                    index,
                    text,
                    bounds,
                    content,
                    wrapped,
                    origins,
                }
            })
            .collect();

        let dividers = geometry::divider_rects(config, count, cell_width, size);

        tracing::debug!(
            count,
            width = size.width,
            height = size.height,
            cell_width,
            max_lines,
            dividers = dividers.len(),
            "strip layout complete"
        );

        Ok(StripLayout {
            size,
            cell_width,
            metrics,
            cells,
            dividers,
            reference,
        })
    }

    fn wrap_all(
        &self,
        items: &[String],
        budget: f32,
        text_size: f32,
    ) -> Result<Vec<WrappedItem>, LayoutError> {
        items
            .iter()
            .map(|text| Ok(break_lines(text, budget, text_size, &self.measurer)?))
            .collect()
    }
}

/// Run a single layout pass with a one-off engine.
///
/// # Errors
///
/// See [`StripLayoutEngine::layout`].
pub fn layout<M: TextMeasurer, S: AsRef<str>>(
    measurer: M,
    config: &StripConfig,
    items: &[S],
    width: MeasureSpec,
    height: MeasureSpec,
) -> Result<StripLayout, LayoutError> {
    StripLayoutEngine::new(measurer).layout(config, items, width, height)
}
