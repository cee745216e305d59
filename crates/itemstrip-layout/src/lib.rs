#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Layout engine for horizontal strips of wrapped text items.
//!
//! Given item strings, a [`TextMeasurer`] and a [`StripConfig`], a layout pass
//! computes:
//!
//! - **Wrapped text**: each item broken into lines that fit its cell
//! - **Height**: derived from the tallest item, optionally at a reference width
//! - **Cell geometry**: outer boxes, padded content boxes and divider rectangles
//! - **Line origins**: baseline positions under the configured [`Gravity`]
//!
//! The result is handed to a [`StripRenderer`], which issues draw calls on any
//! [`itemstrip_core::Canvas`].
//!
//! ```
//! use itemstrip_layout::{
//!     DividerEdges, MeasureSpec, MonospaceMeasurer, StripConfig, StripLayoutEngine,
//! };
//!
//! let config = StripConfig::new()
//!     .with_item_count(4)
//!     .with_dividers(4.0, DividerEdges::MIDDLE);
//! let engine = StripLayoutEngine::new(MonospaceMeasurer::default());
//! let layout = engine
//!     .layout(&config, &["one", "two"], MeasureSpec::Exact(412.0), MeasureSpec::Unspecified)
//!     .expect("exact width");
//! assert_eq!(layout.cell_width, 100.0);
//! assert_eq!(layout.cell_count(), 4);
//! ```

mod config;
mod engine;
mod error;
pub mod geometry;
mod line_break;
mod measure;
mod normalize;
mod render;

pub use config::{
    parse_items, DividerConfig, DividerEdge, DividerEdges, Gravity, StripConfig, MAX_ITEM_COUNT,
};
pub use engine::{layout, CellLayout, MeasureSpec, StripLayout, StripLayoutEngine};
pub use error::{ConfigError, LayoutError, MeasureError};
pub use geometry::DividerRect;
pub use line_break::{break_lines, WrappedItem, WrappedLine};
pub use measure::{LineMetrics, MonospaceMeasurer, TextMeasurer};
pub use normalize::{normalize, NormalizedItems};
pub use render::{RenderStyle, StripRenderer};
