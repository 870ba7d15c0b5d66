use scroll_core::{Shape, ValidationError};
use scroll_data::model::{MarkerSpec, PathPointSpec};

fn path_marker(pos: f32, points: Vec<PathPointSpec>) -> MarkerSpec {
    MarkerSpec::new(pos)
        .with("x", "0p")
        .with("y", "0p")
        .with_path(points)
}

#[test]
fn point_type_mismatch_across_markers_fails() {
    // Marker 2 has a quadratic at index 1 where marker 1 established a line.
    let err = Shape::path(vec![
        path_marker(
            0.0,
            vec![
                PathPointSpec::line("10p", "0p"),
                PathPointSpec::line("0p", "10p"),
            ],
        ),
        path_marker(
            1.0,
            vec![
                PathPointSpec::line("10p", "0p"),
                PathPointSpec::quadratic("0p", "10p", "5p", "5p"),
            ],
        ),
    ])
    .unwrap_err();

    assert!(matches!(
        err,
        ValidationError::PointKindMismatch {
            expected: 'l',
            index: 1
        }
    ));
}

#[test]
fn path_length_mismatch_fails() {
    let err = Shape::path(vec![
        path_marker(
            0.0,
            vec![
                PathPointSpec::line("10p", "0p"),
                PathPointSpec::line("0p", "10p"),
            ],
        ),
        path_marker(1.0, vec![PathPointSpec::line("10p", "0p")]),
    ])
    .unwrap_err();

    assert!(matches!(
        err,
        ValidationError::PathLengthMismatch {
            expected: 2,
            got: 1
        }
    ));
}

#[test]
fn marker_without_path_array_fails() {
    let err = Shape::path(vec![
        path_marker(0.0, vec![PathPointSpec::line("10p", "0p")]),
        MarkerSpec::new(1.0).with("x", "0p").with("y", "0p"),
    ])
    .unwrap_err();

    assert!(matches!(err, ValidationError::MissingPath));
}

#[test]
fn unknown_point_type_fails() {
    let mut bad = PathPointSpec::line("10p", "0p");
    bad.kind = "z".into();

    let err = Shape::path(vec![path_marker(0.0, vec![bad])]).unwrap_err();
    assert!(matches!(err, ValidationError::UnknownPointKind(tag) if tag == "z"));
}

#[test]
fn quadratic_requires_first_control_point() {
    let mut point = PathPointSpec::line("10p", "0p");
    point.kind = "q".into();

    let err = Shape::path(vec![path_marker(0.0, vec![point])]).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::MissingCoordinate {
            kind: 'q',
            field: "p1x"
        }
    ));
}

#[test]
fn bezier_requires_second_control_point() {
    let mut point = PathPointSpec::quadratic("10p", "0p", "5p", "5p");
    point.kind = "b".into();

    let err = Shape::path(vec![path_marker(0.0, vec![point])]).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::MissingCoordinate {
            kind: 'b',
            field: "p2x"
        }
    ));
}

#[test]
fn missing_endpoint_coordinate_fails() {
    let mut point = PathPointSpec::line("10p", "0p");
    point.y = None;

    let err = Shape::path(vec![path_marker(0.0, vec![point])]).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::MissingCoordinate {
            kind: 'l',
            field: "y"
        }
    ));
}

#[test]
fn markers_deserialize_from_json() {
    let markers: Vec<MarkerSpec> = serde_json::from_value(serde_json::json!([
        { "pos": 0.0, "x": "10p", "y": "10p", "r": "5p", "fill": true,
          "fillColor": "crimson" },
        { "pos": 1.0, "x": "20p", "y": "10p", "r": "5p", "fill": true,
          "fillColor": [10, 20, 30] }
    ]))
    .unwrap();

    let shape = Shape::circle(markers).unwrap();
    assert_eq!(shape.markers().len(), 2);
}
