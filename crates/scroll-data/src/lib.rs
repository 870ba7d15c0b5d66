// scroll-data: value types and serde structs for marker definitions
pub mod color;
pub mod distance;
pub mod model;

pub use color::{ColorSpec, Rgb};
pub use distance::{DistanceUnit, DistanceValue, ParseError};
pub use model::{FieldValue, MarkerSpec, PathPointSpec};

#[cfg(test)]
mod tests {
    use super::model::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_circle_marker() {
        let data = json!({
            "pos": 0.5,
            "x": "10p",
            "y": "25w",
            "r": "5h",
            "fill": true,
            "fillColor": "red",
            "borderColor": [12, 34, 56]
        });
        let marker: MarkerSpec = serde_json::from_value(data).unwrap();
        assert_eq!(marker.pos, 0.5);
        assert_eq!(marker.fields["x"], FieldValue::Text("10p".into()));
        assert_eq!(marker.fields["fill"], FieldValue::Flag(true));
        assert_eq!(marker.fields["fillColor"], FieldValue::Text("red".into()));
        assert_eq!(
            marker.fields["borderColor"],
            FieldValue::Rgb([12.0, 34.0, 56.0])
        );
        assert!(marker.path.is_none());
    }

    #[test]
    fn test_deserialize_path_marker() {
        let data = json!({
            "pos": 1,
            "x": "0p",
            "y": "0p",
            "path": [
                { "type": "l", "x": "10p", "y": "0p" },
                { "type": "q", "x": "10p", "y": "10p", "p1x": "5p", "p1y": "0p" },
                { "type": "b", "x": "0p", "y": "0p",
                  "p1x": "1p", "p1y": "1p", "p2x": "2p", "p2y": "2p" }
            ]
        });
        let marker: MarkerSpec = serde_json::from_value(data).unwrap();
        let path = marker.path.expect("path points");
        assert_eq!(path.len(), 3);
        assert_eq!(path[0].kind, "l");
        assert_eq!(path[1].p1x.as_deref(), Some("5p"));
        assert_eq!(path[2].p2y.as_deref(), Some("2p"));
    }

    #[test]
    fn test_missing_pos_is_rejected() {
        let data = json!({ "x": "10p" });
        assert!(serde_json::from_value::<MarkerSpec>(data).is_err());
    }
}
