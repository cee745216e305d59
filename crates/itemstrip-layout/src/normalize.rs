//! Reconciles the configured item count with the supplied items.

use serde::{Deserialize, Serialize};

/// Items padded to the effective cell count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizedItems {
    /// Number of cells in the strip
    pub count: usize,
    /// One string per cell, in cell order
    pub items: Vec<String>,
}

/// Pad or extend `items` to the effective cell count.
///
/// With no configured count the items decide. A configured count pads the
/// tail with empty strings; supplied items are never truncated, so more items
/// than the configured count raises the count instead.
#[must_use]
pub fn normalize<S: AsRef<str>>(items: &[S], item_count: Option<usize>) -> NormalizedItems {
    let count = item_count.map_or(items.len(), |n| n.max(items.len()));
    let mut padded: Vec<String> = items.iter().map(|s| s.as_ref().to_owned()).collect();
    padded.resize(count, String::new());
    NormalizedItems {
        count,
        items: padded,
    }
}
