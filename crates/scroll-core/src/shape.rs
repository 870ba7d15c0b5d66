use std::collections::HashMap;

use glam::Vec2;
use kurbo::{BezPath, PathEl, Point};
use scroll_data::color::{ColorSpec, Rgb};
use scroll_data::distance::DistanceValue;
use scroll_data::model::{FieldValue, MarkerSpec, PathPointSpec};

use crate::animatable::{locate, merge_text, Interpolatable};
use crate::canvas::DrawContext;
use crate::errors::ValidationError;

/// The closed set of renderable shape kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Path,
    TextBox,
}

/// Field schema for one shape kind, consulted by the shared validation and
/// interpolation routines.
struct Schema {
    distances: &'static [&'static str],
    colors: &'static [&'static str],
    flags: &'static [&'static str],
    text: bool,
    path: bool,
}

const CIRCLE_SCHEMA: Schema = Schema {
    distances: &["x", "y", "r"],
    colors: &["fillColor", "borderColor"],
    flags: &["fill", "stroke"],
    text: false,
    path: false,
};

const RECTANGLE_SCHEMA: Schema = Schema {
    distances: &["x", "y", "w", "h"],
    colors: &["fillColor", "borderColor"],
    flags: &["fill", "stroke"],
    text: false,
    path: false,
};

const PATH_SCHEMA: Schema = Schema {
    distances: &["x", "y"],
    colors: &["fillColor", "borderColor"],
    flags: &["fill", "stroke"],
    text: false,
    path: true,
};

const TEXT_BOX_SCHEMA: Schema = Schema {
    distances: &["x", "y", "fontSize"],
    colors: &["color"],
    flags: &["fill", "stroke"],
    text: true,
    path: false,
};

impl ShapeKind {
    fn schema(self) -> &'static Schema {
        match self {
            ShapeKind::Circle => &CIRCLE_SCHEMA,
            ShapeKind::Rectangle => &RECTANGLE_SCHEMA,
            ShapeKind::Path => &PATH_SCHEMA,
            ShapeKind::TextBox => &TEXT_BOX_SCHEMA,
        }
    }
}

/// Segment curve type, the `type` tag of a raw path point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointKind {
    Line,
    Quadratic,
    Bezier,
}

impl PointKind {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "l" => Some(PointKind::Line),
            "q" => Some(PointKind::Quadratic),
            "b" => Some(PointKind::Bezier),
            _ => None,
        }
    }

    fn tag(self) -> char {
        match self {
            PointKind::Line => 'l',
            PointKind::Quadratic => 'q',
            PointKind::Bezier => 'b',
        }
    }
}

/// One normalized path segment, relative to the previous point.
///
/// Endpoint offsets accumulate from the shape's anchor in path order;
/// `c1` is an offset from the segment's start point, `c2` from its end.
#[derive(Clone, Debug)]
pub enum PathSegment {
    Line {
        end: (DistanceValue, DistanceValue),
    },
    Quadratic {
        c1: (DistanceValue, DistanceValue),
        end: (DistanceValue, DistanceValue),
    },
    Bezier {
        c1: (DistanceValue, DistanceValue),
        c2: (DistanceValue, DistanceValue),
        end: (DistanceValue, DistanceValue),
    },
}

impl PathSegment {
    pub fn kind(&self) -> PointKind {
        match self {
            PathSegment::Line { .. } => PointKind::Line,
            PathSegment::Quadratic { .. } => PointKind::Quadratic,
            PathSegment::Bezier { .. } => PointKind::Bezier,
        }
    }
}

/// One normalized keyframe: a progress position plus the shape's field
/// values at that position. Read-only once the owning shape is built.
#[derive(Clone, Debug)]
pub struct Marker {
    pub pos: f32,
    distances: HashMap<&'static str, DistanceValue>,
    colors: HashMap<&'static str, ColorSpec>,
    flags: HashMap<&'static str, bool>,
    text: Option<String>,
    path: Vec<PathSegment>,
}

impl Marker {
    /// Bare marker used by search tests.
    #[cfg(test)]
    pub(crate) fn at(pos: f32) -> Self {
        Self {
            pos,
            distances: HashMap::new(),
            colors: HashMap::new(),
            flags: HashMap::new(),
            text: None,
            path: Vec::new(),
        }
    }

    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }
}

/// An animated shape: a kind plus its markers sorted ascending by `pos`.
///
/// Immutable after construction; interpolated values are recomputed on
/// every render call and never cached.
#[derive(Debug)]
pub struct Shape {
    kind: ShapeKind,
    markers: Vec<Marker>,
}

impl Shape {
    pub fn circle(markers: Vec<MarkerSpec>) -> Result<Self, ValidationError> {
        Self::validate(ShapeKind::Circle, markers)
    }

    pub fn rectangle(markers: Vec<MarkerSpec>) -> Result<Self, ValidationError> {
        Self::validate(ShapeKind::Rectangle, markers)
    }

    pub fn path(markers: Vec<MarkerSpec>) -> Result<Self, ValidationError> {
        Self::validate(ShapeKind::Path, markers)
    }

    pub fn text_box(markers: Vec<MarkerSpec>) -> Result<Self, ValidationError> {
        Self::validate(ShapeKind::TextBox, markers)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Validates and normalizes raw marker data into an owned shape.
    ///
    /// Pure transform: the input is consumed, the output is fully valid or
    /// nothing is constructed.
    fn validate(kind: ShapeKind, specs: Vec<MarkerSpec>) -> Result<Self, ValidationError> {
        if specs.is_empty() {
            return Err(ValidationError::NoMarkers);
        }

        let schema = kind.schema();

        // The first marker's path fixes the canonical per-index point-type
        // sequence for the whole shape.
        let canonical: Option<Vec<PointKind>> = if schema.path {
            let first = specs[0].path.as_deref().ok_or(ValidationError::MissingPath)?;
            Some(
                first
                    .iter()
                    .map(|p| {
                        PointKind::from_tag(&p.kind)
                            .ok_or_else(|| ValidationError::UnknownPointKind(p.kind.clone()))
                    })
                    .collect::<Result<_, _>>()?,
            )
        } else {
            None
        };

        let mut markers = specs
            .iter()
            .map(|spec| normalize_marker(schema, canonical.as_deref(), spec))
            .collect::<Result<Vec<_>, _>>()?;

        // Stable: markers sharing a pos keep their supplied order.
        markers.sort_by(|a, b| a.pos.total_cmp(&b.pos));

        Ok(Shape { kind, markers })
    }

    /// Draws the interpolated state for `progress` onto `ctx`.
    ///
    /// Progress values outside the marker range draw nothing; that is the
    /// normal out-of-view signal, not an error.
    pub fn render(&self, ctx: &mut dyn DrawContext, progress: f32, canvas_w: f32, canvas_h: f32) {
        let (m1, m2) = match locate(&self.markers, progress) {
            (Some(m1), Some(m2)) => (m1, m2),
            _ => {
                tracing::trace!(progress, "progress outside marker range, skipping");
                return;
            }
        };

        let zero_width = m1.pos == m2.pos;
        let rel = if zero_width {
            0.0
        } else {
            (progress - m1.pos) / (m2.pos - m1.pos)
        };

        let schema = self.kind.schema();

        let mut dist: HashMap<&'static str, f32> = HashMap::new();
        for &field in schema.distances {
            let v1 = m1.distances[field].resolve(canvas_w, canvas_h);
            let v = if zero_width {
                v1
            } else {
                v1.lerp(&m2.distances[field].resolve(canvas_w, canvas_h), rel)
            };
            dist.insert(field, v);
        }

        let mut colors: HashMap<&'static str, Rgb> = HashMap::new();
        for &field in schema.colors {
            let c1 = m1.colors.get(field).map_or(Rgb::BLACK, ColorSpec::resolve);
            let c2 = m2.colors.get(field).map_or(Rgb::BLACK, ColorSpec::resolve);
            colors.insert(field, c1.lerp(&c2, rel));
        }

        // Flags never interpolate; they snap from the lower bracket.
        let fill = m1.flags.get("fill") == Some(&true);
        let stroke = m1.flags.get("stroke") != Some(&false);

        ctx.begin_path();

        match self.kind {
            ShapeKind::Circle => ctx.arc(dist["x"], dist["y"], dist["r"]),
            ShapeKind::Rectangle => ctx.rect(dist["x"], dist["y"], dist["w"], dist["h"]),
            ShapeKind::Path => {
                let anchor = Vec2::new(dist["x"], dist["y"]);
                let path = interpolate_path(m1, m2, rel, zero_width, anchor, canvas_w, canvas_h);
                replay_path(&path, ctx);
            }
            ShapeKind::TextBox => {
                let text = if zero_width {
                    m1.text.clone().unwrap_or_default()
                } else {
                    merge_text(
                        m1.text.as_deref().unwrap_or(""),
                        m2.text.as_deref().unwrap_or(""),
                        rel,
                    )
                };

                ctx.set_font_size(dist["fontSize"]);
                if m1.flags.get("stroke") == Some(&true) {
                    ctx.set_stroke_color(colors["color"]);
                    ctx.stroke_text(&text, dist["x"], dist["y"]);
                } else {
                    ctx.set_fill_color(colors["color"]);
                    ctx.fill_text(&text, dist["x"], dist["y"]);
                }
                return;
            }
        }

        if fill {
            ctx.set_fill_color(colors["fillColor"]);
            ctx.fill();
        }
        if stroke {
            ctx.set_stroke_color(colors["borderColor"]);
            ctx.stroke();
        }
    }
}

fn normalize_marker(
    schema: &Schema,
    canonical: Option<&[PointKind]>,
    spec: &MarkerSpec,
) -> Result<Marker, ValidationError> {
    let mut distances = HashMap::new();
    for &field in schema.distances {
        match spec.fields.get(field) {
            Some(FieldValue::Text(s)) => {
                distances.insert(field, s.parse::<DistanceValue>()?);
            }
            _ => return Err(ValidationError::ExpectedDistance { field }),
        }
    }

    // Color fields are optional; absent ones resolve to black at render.
    let mut colors = HashMap::new();
    for &field in schema.colors {
        match spec.fields.get(field) {
            Some(FieldValue::Text(name)) => {
                colors.insert(field, ColorSpec::Named(name.clone()));
            }
            Some(FieldValue::Rgb(channels)) => {
                colors.insert(field, ColorSpec::Triple(*channels));
            }
            None => {}
            Some(_) => return Err(ValidationError::ExpectedColor { field }),
        }
    }

    let mut flags = HashMap::new();
    for &field in schema.flags {
        match spec.fields.get(field) {
            Some(FieldValue::Flag(b)) => {
                flags.insert(field, *b);
            }
            None => {}
            Some(_) => return Err(ValidationError::ExpectedFlag { field }),
        }
    }

    let text = if schema.text {
        match spec.fields.get("text") {
            Some(FieldValue::Text(s)) => Some(s.clone()),
            _ => return Err(ValidationError::ExpectedText),
        }
    } else {
        None
    };

    let path = if let Some(kinds) = canonical {
        let raw = spec.path.as_deref().ok_or(ValidationError::MissingPath)?;
        if raw.len() != kinds.len() {
            return Err(ValidationError::PathLengthMismatch {
                expected: kinds.len(),
                got: raw.len(),
            });
        }
        raw.iter()
            .zip(kinds)
            .enumerate()
            .map(|(index, (point, &expected))| normalize_point(index, point, expected))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        Vec::new()
    };

    Ok(Marker {
        pos: spec.pos,
        distances,
        colors,
        flags,
        text,
        path,
    })
}

fn normalize_point(
    index: usize,
    raw: &PathPointSpec,
    expected: PointKind,
) -> Result<PathSegment, ValidationError> {
    let kind = PointKind::from_tag(&raw.kind)
        .ok_or_else(|| ValidationError::UnknownPointKind(raw.kind.clone()))?;
    if kind != expected {
        return Err(ValidationError::PointKindMismatch {
            expected: expected.tag(),
            index,
        });
    }

    let coord = |field: &'static str, value: &Option<String>| -> Result<DistanceValue, ValidationError> {
        let s = value
            .as_deref()
            .ok_or(ValidationError::MissingCoordinate {
                kind: kind.tag(),
                field,
            })?;
        Ok(s.parse()?)
    };

    let end = (coord("x", &raw.x)?, coord("y", &raw.y)?);

    Ok(match kind {
        PointKind::Line => PathSegment::Line { end },
        PointKind::Quadratic => PathSegment::Quadratic {
            c1: (coord("p1x", &raw.p1x)?, coord("p1y", &raw.p1y)?),
            end,
        },
        PointKind::Bezier => PathSegment::Bezier {
            c1: (coord("p1x", &raw.p1x)?, coord("p1y", &raw.p1y)?),
            c2: (coord("p2x", &raw.p2x)?, coord("p2y", &raw.p2y)?),
            end,
        },
    })
}

/// Builds the interpolated absolute-coordinate path for one frame,
/// accumulating relative offsets from the anchor in path order.
fn interpolate_path(
    m1: &Marker,
    m2: &Marker,
    rel: f32,
    zero_width: bool,
    anchor: Vec2,
    canvas_w: f32,
    canvas_h: f32,
) -> BezPath {
    let blend = |d1: &(DistanceValue, DistanceValue), d2: &(DistanceValue, DistanceValue)| {
        let v1 = Vec2::new(
            d1.0.resolve(canvas_w, canvas_h),
            d1.1.resolve(canvas_w, canvas_h),
        );
        if zero_width {
            v1
        } else {
            let v2 = Vec2::new(
                d2.0.resolve(canvas_w, canvas_h),
                d2.1.resolve(canvas_w, canvas_h),
            );
            v1.lerp(v2, rel)
        }
    };

    let mut path = BezPath::new();
    path.move_to(to_point(anchor));

    let mut cursor = anchor;
    for (s1, s2) in m1.path.iter().zip(&m2.path) {
        match (s1, s2) {
            (PathSegment::Line { end: e1 }, PathSegment::Line { end: e2 }) => {
                cursor += blend(e1, e2);
                path.line_to(to_point(cursor));
            }
            (
                PathSegment::Quadratic { c1: a1, end: e1 },
                PathSegment::Quadratic { c1: a2, end: e2 },
            ) => {
                let control = cursor + blend(a1, a2);
                cursor += blend(e1, e2);
                path.quad_to(to_point(control), to_point(cursor));
            }
            (
                PathSegment::Bezier {
                    c1: a1,
                    c2: b1,
                    end: e1,
                },
                PathSegment::Bezier {
                    c1: a2,
                    c2: b2,
                    end: e2,
                },
            ) => {
                let control1 = cursor + blend(a1, a2);
                cursor += blend(e1, e2);
                let control2 = cursor + blend(b1, b2);
                path.curve_to(to_point(control1), to_point(control2), to_point(cursor));
            }
            // Per-index kinds are canonicalized at validation time.
            _ => unreachable!("segment kinds diverge after validation"),
        }
    }

    path
}

fn to_point(v: Vec2) -> Point {
    Point::new(v.x as f64, v.y as f64)
}

fn replay_path(path: &BezPath, ctx: &mut dyn DrawContext) {
    for el in path.elements() {
        match el {
            PathEl::MoveTo(p) => ctx.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => ctx.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => ctx.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32),
            PathEl::CurveTo(c1, c2, p) => ctx.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => {}
        }
    }
}
