//! Strip configuration, its defaults, and YAML loading.

use crate::error::ConfigError;
use itemstrip_core::{Color, Insets};
use serde::{Deserialize, Serialize};

/// Largest accepted `item_count`.
pub const MAX_ITEM_COUNT: usize = 4096;

/// Alignment policy for lines inside a cell's content box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gravity {
    /// Lines stack from the top-left of the content box
    #[default]
    None,
    /// The block of lines is centered vertically, lines start at the left
    CenterVertical,
    /// Centered vertically, and each line centered horizontally
    Center,
}

/// One edge of the strip, or the boundaries between cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DividerEdge {
    /// Leading vertical edge
    Start,
    /// Top horizontal edge
    Top,
    /// Trailing vertical edge
    End,
    /// Bottom horizontal edge
    Bottom,
    /// Between adjacent cells
    Middle,
}

/// Which divider edges are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerEdges {
    /// Leading edge
    pub start: bool,
    /// Top edge
    pub top: bool,
    /// Trailing edge
    pub end: bool,
    /// Bottom edge
    pub bottom: bool,
    /// Between cells
    pub middle: bool,
}

impl DividerEdges {
    /// No dividers.
    pub const NONE: Self = Self {
        start: false,
        top: false,
        end: false,
        bottom: false,
        middle: false,
    };

    /// Every edge and every cell boundary.
    pub const ALL: Self = Self {
        start: true,
        top: true,
        end: true,
        bottom: true,
        middle: true,
    };

    /// Only the boundaries between cells.
    pub const MIDDLE: Self = Self {
        middle: true,
        ..Self::NONE
    };

    /// Check whether an edge is enabled.
    #[must_use]
    pub const fn contains(&self, edge: DividerEdge) -> bool {
        match edge {
            DividerEdge::Start => self.start,
            DividerEdge::Top => self.top,
            DividerEdge::End => self.end,
            DividerEdge::Bottom => self.bottom,
            DividerEdge::Middle => self.middle,
        }
    }

    /// Return a copy with `edge` enabled.
    #[must_use]
    pub const fn with(mut self, edge: DividerEdge) -> Self {
        match edge {
            DividerEdge::Start => self.start = true,
            DividerEdge::Top => self.top = true,
            DividerEdge::End => self.end = true,
            DividerEdge::Bottom => self.bottom = true,
            DividerEdge::Middle => self.middle = true,
        }
        self
    }
}

/// Divider appearance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerConfig {
    /// Fill color
    #[serde(with = "itemstrip_core::color::hex")]
    pub color: Color,
    /// Thickness in pixels
    pub width: f32,
    /// Enabled edges
    pub edges: DividerEdges,
}

impl DividerConfig {
    /// Thickness reserved at `edge`: the divider width if enabled, else zero.
    #[must_use]
    pub fn width_at(&self, edge: DividerEdge) -> f32 {
        if self.edges.contains(edge) {
            self.width
        } else {
            0.0
        }
    }
}

impl Default for DividerConfig {
    fn default() -> Self {
        Self {
            color: Color::GRAY,
            width: 0.0,
            edges: DividerEdges::NONE,
        }
    }
}

/// Layout parameters for one strip.
///
/// Every field has a default, so a YAML document may set any subset. The
/// optional fields accept `null`, omission or `-1` for "derive" or "disabled":
///
/// ```
/// use itemstrip_layout::{Gravity, StripConfig};
///
/// let config = StripConfig::from_yaml(
///     "item_count: 4\ntext_size: 30\ngravity: center\npadding: { start: 8, end: 8 }",
/// )
/// .expect("valid config");
/// assert_eq!(config.item_count, Some(4));
/// assert_eq!(config.gravity, Gravity::Center);
/// assert_eq!(config.padding.start, 8.0);
/// assert_eq!(config.item_width, None);
///
/// let host = StripConfig::from_yaml("item_count: -1\nref_width: -1").expect("valid config");
/// assert_eq!(host.item_count, None);
/// assert_eq!(host.ref_width, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Configured cell count; `None` derives it from the items
    #[serde(deserialize_with = "sentinel::count")]
    pub item_count: Option<usize>,
    /// Text size in pixels
    pub text_size: f32,
    /// Text color
    #[serde(with = "itemstrip_core::color::hex")]
    pub text_color: Color,
    /// Fixed cell width; `None` divides the strip width evenly
    #[serde(deserialize_with = "sentinel::length")]
    pub item_width: Option<f32>,
    /// Fixed strip content height; `None` derives it from the tallest item
    #[serde(deserialize_with = "sentinel::length")]
    pub item_height: Option<f32>,
    /// Reference strip width used only for height; `None` disables it
    #[serde(deserialize_with = "sentinel::length")]
    pub ref_width: Option<f32>,
    /// Insets applied inside every cell
    pub padding: Insets,
    /// Outer frame reserved by the host around the whole strip
    pub frame: Insets,
    /// Divider appearance
    pub divider: DividerConfig,
    /// Line alignment inside each cell
    pub gravity: Gravity,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            item_count: None,
            text_size: 24.0,
            text_color: Color::GRAY,
            item_width: None,
            item_height: None,
            ref_width: None,
            padding: Insets::ZERO,
            frame: Insets::ZERO,
            divider: DividerConfig::default(),
            gravity: Gravity::None,
        }
    }
}

impl StripConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configured cell count.
    #[must_use]
    pub const fn with_item_count(mut self, count: usize) -> Self {
        self.item_count = Some(count);
        self
    }

    /// Set the text size.
    #[must_use]
    pub const fn with_text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    /// Set the text color.
    #[must_use]
    pub const fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set a fixed cell width.
    #[must_use]
    pub const fn with_item_width(mut self, width: f32) -> Self {
        self.item_width = Some(width);
        self
    }

    /// Set a fixed strip content height.
    #[must_use]
    pub const fn with_item_height(mut self, height: f32) -> Self {
        self.item_height = Some(height);
        self
    }

    /// Set the reference width used for height.
    #[must_use]
    pub const fn with_ref_width(mut self, width: f32) -> Self {
        self.ref_width = Some(width);
        self
    }

    /// Set per-cell padding.
    #[must_use]
    pub const fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Set the outer frame insets.
    #[must_use]
    pub const fn with_frame(mut self, frame: Insets) -> Self {
        self.frame = frame;
        self
    }

    /// Set divider thickness and enabled edges.
    #[must_use]
    pub const fn with_dividers(mut self, width: f32, edges: DividerEdges) -> Self {
        self.divider.width = width;
        self.divider.edges = edges;
        self
    }

    /// Set the divider color.
    #[must_use]
    pub const fn with_divider_color(mut self, color: Color) -> Self {
        self.divider.color = color;
        self
    }

    /// Set the gravity.
    #[must_use]
    pub const fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Parse a configuration from YAML and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a value is out of range.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check every value against its documented domain.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(count) = self.item_count {
            if count > MAX_ITEM_COUNT {
                return Err(ConfigError::invalid(
                    "item_count",
                    format!("must be at most {MAX_ITEM_COUNT}, got {count}"),
                ));
            }
        }

        if !(self.text_size.is_finite() && self.text_size > 0.0) {
            return Err(ConfigError::invalid(
                "text_size",
                format!("must be greater than zero, got {}", self.text_size),
            ));
        }

        for (group, insets) in [("padding", &self.padding), ("frame", &self.frame)] {
            for (edge, value) in insets.edges() {
                if !(value.is_finite() && value >= 0.0) {
                    return Err(ConfigError::invalid(
                        format!("{group}.{edge}"),
                        format!("must be zero or positive, got {value}"),
                    ));
                }
            }
        }

        if !(self.divider.width.is_finite() && self.divider.width >= 0.0) {
            return Err(ConfigError::invalid(
                "divider.width",
                format!("must be zero or positive, got {}", self.divider.width),
            ));
        }

        for (field, value) in [
            ("item_width", self.item_width),
            ("item_height", self.item_height),
            ("ref_width", self.ref_width),
        ] {
            if let Some(v) = value {
                if !(v.is_finite() && v > 0.0) {
                    return Err(ConfigError::invalid(
                        field,
                        format!("must be greater than zero when set, got {v}"),
                    ));
                }
            }
        }

        Ok(())
    }
}

/// `-1` is the host convention for "auto" or "disabled".
mod sentinel {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub(super) fn count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<usize>, D::Error> {
        match Option::<i64>::deserialize(d)? {
            None | Some(-1) => Ok(None),
            Some(n) => usize::try_from(n)
                .map(Some)
                .map_err(|_| D::Error::custom(format!("expected -1 or a count, got {n}"))),
        }
    }

    pub(super) fn length<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f32>, D::Error> {
        Ok(Option::<f32>::deserialize(d)?.filter(|&v| v != -1.0))
    }
}

/// Split a pipe-delimited item list (`"a|b|c"`).
///
/// Empty segments stay as empty items so positions are preserved; an empty
/// input yields no items.
#[must_use]
pub fn parse_items(encoded: &str) -> Vec<String> {
    if encoded.is_empty() {
        return Vec::new();
    }
    encoded.split('|').map(str::to_owned).collect()
}
