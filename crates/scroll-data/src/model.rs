use serde::Deserialize;
use std::collections::HashMap;

/// One raw keyframe as supplied by the host, before any validation.
///
/// Everything except `pos` and `path` is a flat bag of per-shape fields;
/// the shape's schema decides which are required and how they are typed.
#[derive(Clone, Debug, Deserialize)]
pub struct MarkerSpec {
    pub pos: f32,
    #[serde(default)]
    pub path: Option<Vec<PathPointSpec>>,
    #[serde(flatten)]
    pub fields: HashMap<String, FieldValue>,
}

impl MarkerSpec {
    pub fn new(pos: f32) -> Self {
        Self {
            pos,
            path: None,
            fields: HashMap::new(),
        }
    }

    /// Chainable field setter for building markers in code instead of JSON.
    pub fn with(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn with_path(mut self, points: Vec<PathPointSpec>) -> Self {
        self.path = Some(points);
        self
    }
}

/// A loosely-typed marker field value.
///
/// Distances arrive as strings (`"10p"`), colors as names or `[r,g,b]`
/// triples, flags as booleans.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Rgb([f32; 3]),
    Text(String),
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<[f32; 3]> for FieldValue {
    fn from(channels: [f32; 3]) -> Self {
        FieldValue::Rgb(channels)
    }
}

/// One raw path segment. Coordinates are distance strings, relative to the
/// previous point; control-point fields are required or not depending on
/// the segment type (`l`, `q` or `b`).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PathPointSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub x: Option<String>,
    #[serde(default)]
    pub y: Option<String>,
    #[serde(default)]
    pub p1x: Option<String>,
    #[serde(default)]
    pub p1y: Option<String>,
    #[serde(default)]
    pub p2x: Option<String>,
    #[serde(default)]
    pub p2y: Option<String>,
}

impl PathPointSpec {
    /// A straight line segment.
    pub fn line(x: &str, y: &str) -> Self {
        Self {
            kind: "l".into(),
            x: Some(x.into()),
            y: Some(y.into()),
            ..Self::default()
        }
    }

    /// A quadratic segment with one control point.
    pub fn quadratic(x: &str, y: &str, p1x: &str, p1y: &str) -> Self {
        Self {
            kind: "q".into(),
            x: Some(x.into()),
            y: Some(y.into()),
            p1x: Some(p1x.into()),
            p1y: Some(p1y.into()),
            ..Self::default()
        }
    }

    /// A cubic segment with two control points.
    pub fn bezier(x: &str, y: &str, p1x: &str, p1y: &str, p2x: &str, p2y: &str) -> Self {
        Self {
            kind: "b".into(),
            x: Some(x.into()),
            y: Some(y.into()),
            p1x: Some(p1x.into()),
            p1y: Some(p1y.into()),
            p2x: Some(p2x.into()),
            p2y: Some(p2y.into()),
        }
    }
}
