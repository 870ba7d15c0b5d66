//! # scrollmotion
//!
//! A scroll-driven keyframe animation engine: shapes carry markers indexed
//! by scroll progress, and every frame the engine finds the bracketing
//! marker pair, interpolates each field linearly, and replays the result
//! as draw calls on an abstract 2D context.
//!
//! The engine never touches the DOM, event loops or a concrete canvas; the
//! host supplies a [`DrawContext`] implementation and a scroll offset.

pub mod surface;

pub use scroll_core::{
    locate, merge_text, Command, DrawContext, Interpolatable, Marker, PathSegment, PointKind,
    Recorder, Shape, ShapeKind, ValidationError,
};
pub use scroll_data::{
    ColorSpec, DistanceUnit, DistanceValue, FieldValue, MarkerSpec, ParseError, PathPointSpec, Rgb,
};
pub use surface::Pane;
