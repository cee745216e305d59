//! Error types for itemstrip-layout.

use crate::engine::MeasureSpec;
use thiserror::Error;

/// Errors raised while loading or validating a [`StripConfig`](crate::StripConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML decoding error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// A field holds a value outside its documented domain.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Error message
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Failure reported by a [`TextMeasurer`](crate::TextMeasurer).
///
/// The engine never retries; the message is carried to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Text measurement failed: {0}")]
pub struct MeasureError(pub String);

/// Errors that abort a layout pass.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The configuration failed validation.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The measurement collaborator failed.
    #[error(transparent)]
    Measure(#[from] MeasureError),

    /// Auto item width was requested without an exact strip width.
    #[error("Cannot compute intrinsic width: no item width configured and width mode is {mode:?}")]
    UnresolvableWidth {
        /// The width mode the caller supplied
        mode: MeasureSpec,
    },
}
