//! Core types and traits for the itemstrip layout engine.
//!
//! This crate provides the value types shared between the layout engine and
//! any drawing backend:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Insets`]
//! - Color representation: [`Color`]
//! - Draw primitives: [`DrawCommand`], [`TextStyle`]
//! - The [`Canvas`] sink and a [`RecordingCanvas`] for tests

pub mod canvas;
pub mod color;
pub mod draw;
mod geometry;

pub use canvas::{Canvas, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use draw::{BoxStyle, DrawCommand, StrokeStyle, TextStyle};
pub use geometry::{Insets, Point, Rect, Size};
