//! Cell geometry: widths, boxes, heights, line origins and dividers.
//!
//! All values are pixels. Cells sit in a single row inside the frame:
//!
//! ```text
//! frame.start | start | cell 0 | middle | cell 1 | ... | cell n-1 | end | frame.end
//! ```

use crate::config::{DividerEdge, Gravity, StripConfig};
use crate::line_break::WrappedItem;
use crate::measure::LineMetrics;
use itemstrip_core::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// A divider rectangle and the edge it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividerRect {
    /// Which edge produced this divider
    pub edge: DividerEdge,
    /// Filled bounds
    pub bounds: Rect,
}

/// Horizontal space taken by dividers across `count` cells.
#[must_use]
pub fn reserved_divider_width(config: &StripConfig, count: usize) -> f32 {
    let d = &config.divider;
    let boundaries = count.saturating_sub(1) as f32;
    d.width_at(DividerEdge::Middle) * boundaries
        + d.width_at(DividerEdge::Start)
        + d.width_at(DividerEdge::End)
}

/// Width of every cell for a strip `total_width` wide.
///
/// A configured item width is used verbatim. Otherwise the width left after
/// the frame and dividers is split evenly; a result of zero or less clamps to
/// zero and marks a degenerate pass.
#[must_use]
pub fn cell_width(config: &StripConfig, total_width: f32, count: usize) -> f32 {
    if let Some(width) = config.item_width {
        return width;
    }
    if count == 0 {
        return 0.0;
    }
    let available =
        total_width - config.frame.horizontal() - reserved_divider_width(config, count);
    (available / count as f32).max(0.0)
}

/// Strip width implied by a fixed item width, if one is configured.
#[must_use]
pub fn intrinsic_width(config: &StripConfig, count: usize) -> Option<f32> {
    config.item_width.map(|width| {
        config.frame.horizontal() + width * count as f32 + reserved_divider_width(config, count)
    })
}

/// Pixel budget for wrapping text inside a cell.
#[must_use]
pub fn wrap_budget(config: &StripConfig, cell_width: f32) -> f32 {
    cell_width - config.padding.horizontal()
}

/// Strip height derived from the tallest item.
///
/// Includes the cell padding, the top and bottom dividers and the frame.
#[must_use]
pub fn auto_height(config: &StripConfig, max_lines: usize, line_height: f32) -> f32 {
    config.frame.vertical()
        + config.padding.vertical()
        + max_lines as f32 * line_height
        + config.divider.width_at(DividerEdge::Top)
        + config.divider.width_at(DividerEdge::Bottom)
}

/// Most lines in any one item.
#[must_use]
pub fn max_lines(items: &[WrappedItem]) -> usize {
    items.iter().map(WrappedItem::line_count).max().unwrap_or(0)
}

/// Outer box of cell `index`.
#[must_use]
pub fn cell_bounds(config: &StripConfig, index: usize, cell_width: f32, total_height: f32) -> Rect {
    let d = &config.divider;
    let start = config.frame.start
        + d.width_at(DividerEdge::Start)
        + index as f32 * (cell_width + d.width_at(DividerEdge::Middle));
    let top = config.frame.top + d.width_at(DividerEdge::Top);
    let bottom = total_height - config.frame.bottom - d.width_at(DividerEdge::Bottom);
    Rect::from_edges(start, top, start + cell_width, bottom)
}

/// A cell's drawable box: its bounds shrunk by the cell padding.
#[must_use]
pub fn content_box(config: &StripConfig, cell: &Rect) -> Rect {
    cell.deflate(&config.padding)
}

/// Baseline start point of every line of `item` inside `content`.
///
/// Line `i` has its top at `content.y + offset_y + i * line_height` and its
/// baseline one ascent below that.
#[must_use]
pub fn line_origins(
    item: &WrappedItem,
    content: &Rect,
    gravity: Gravity,
    metrics: &LineMetrics,
) -> Vec<Point> {
    let line_height = metrics.line_height();
    let block_height = item.line_count() as f32 * line_height;
    let offset_y = match gravity {
        Gravity::None => 0.0,
        Gravity::CenterVertical | Gravity::Center => {
            ((content.height - block_height) / 2.0).max(0.0)
        }
    };

    item.lines()
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let offset_x = match gravity {
                Gravity::Center => ((content.width - line.width) / 2.0).max(0.0),
                Gravity::None | Gravity::CenterVertical => 0.0,
            };
            Point::new(
                content.x + offset_x,
                content.y + offset_y + i as f32 * line_height - metrics.ascent,
            )
        })
        .collect()
}

/// Divider rectangles for a strip of `count` cells.
///
/// Emitted in start, top, end, bottom order, then one middle divider per
/// boundary between adjacent cells from left to right.
#[must_use]
pub fn divider_rects(
    config: &StripConfig,
    count: usize,
    cell_width: f32,
    size: Size,
) -> Vec<DividerRect> {
    let d = &config.divider;
    let frame = &config.frame;
    let inner = Rect::from_edges(
        frame.start,
        frame.top,
        size.width - frame.end,
        size.height - frame.bottom,
    );
    let cells_end = frame.start
        + d.width_at(DividerEdge::Start)
        + count as f32 * cell_width
        + count.saturating_sub(1) as f32 * d.width_at(DividerEdge::Middle);

    let mut rects = Vec::new();
    let mut push = |edge: DividerEdge, bounds: Rect| {
        if d.edges.contains(edge) {
            rects.push(DividerRect { edge, bounds });
        }
    };

    push(
        DividerEdge::Start,
        Rect::new(inner.x, inner.y, d.width, inner.height),
    );
    push(
        DividerEdge::Top,
        Rect::new(inner.x, inner.y, inner.width, d.width),
    );
    push(
        DividerEdge::End,
        Rect::new(cells_end, inner.y, d.width, inner.height),
    );
    push(
        DividerEdge::Bottom,
        Rect::new(inner.x, inner.bottom() - d.width, inner.width, d.width),
    );

    for i in 0..count.saturating_sub(1) {
        let cell = cell_bounds(config, i, cell_width, size.height);
        push(
            DividerEdge::Middle,
            Rect::new(cell.right(), cell.y, d.width, cell.height),
        );
    }

    rects
}
