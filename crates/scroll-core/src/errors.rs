use scroll_data::distance::ParseError;
use thiserror::Error;

/// Construction-time marker validation failures.
///
/// Fatal to the shape being built; no partial shape is ever produced.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("shape requires at least one marker")]
    NoMarkers,
    #[error("markers must contain the distance key '{field}'")]
    ExpectedDistance { field: &'static str },
    #[error("marker field '{field}' must be a boolean")]
    ExpectedFlag { field: &'static str },
    #[error("marker field '{field}' must be a color name or [r,g,b] triple")]
    ExpectedColor { field: &'static str },
    #[error("text markers must contain a string 'text' field")]
    ExpectedText,
    #[error("path markers must contain a 'path' array")]
    MissingPath,
    #[error("point types must be one of 'l', 'q', 'b', got '{0}'")]
    UnknownPointKind(String),
    #[error("all paths must have the same number of points (expected {expected}, got {got})")]
    PathLengthMismatch { expected: usize, got: usize },
    #[error("expected point of type '{expected}' at position {index}")]
    PointKindMismatch { expected: char, index: usize },
    #[error("point type '{kind}' requires field '{field}'")]
    MissingCoordinate { kind: char, field: &'static str },
    #[error(transparent)]
    Parse(#[from] ParseError),
}
