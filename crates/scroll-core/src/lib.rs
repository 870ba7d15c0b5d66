//! Keyframe interpolation and rendering for scroll-driven animations.
//!
//! A [`Shape`] owns markers sorted by progress position; [`locate`] finds
//! the bracketing pair for a query, and `Shape::render` interpolates every
//! field linearly between the brackets and replays the result as draw
//! calls on a [`DrawContext`].

pub mod animatable;
pub mod canvas;
pub mod errors;
pub mod shape;

pub use animatable::{locate, merge_text, Interpolatable};
pub use canvas::{Command, DrawContext, Recorder};
pub use errors::ValidationError;
pub use shape::{Marker, PathSegment, PointKind, Shape, ShapeKind};
