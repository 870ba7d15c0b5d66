use scrollmotion::{Command, MarkerSpec, Pane, Recorder, Rgb, Shape};

fn demo_pane() -> Pane {
    let mut pane = Pane::new(100.0, 100.0, 3.0).unwrap();

    let circle = Shape::circle(
        serde_json::from_value(serde_json::json!([
            { "pos": 0.0, "x": "10p", "y": "10p", "r": "5p",
              "fill": true, "fillColor": "red" },
            { "pos": 1.0, "x": "20p", "y": "10p", "r": "5p",
              "fill": true, "fillColor": "blue" }
        ]))
        .unwrap(),
    )
    .unwrap();

    let caption = Shape::text_box(vec![
        MarkerSpec::new(0.0)
            .with("x", "50w")
            .with("y", "90h")
            .with("fontSize", "16p")
            .with("color", "black")
            .with("text", ""),
        MarkerSpec::new(2.0)
            .with("x", "50w")
            .with("y", "90h")
            .with("fontSize", "16p")
            .with("color", "black")
            .with("text", "hello"),
    ]);

    pane.add_shape(circle).add_shape(caption.unwrap());
    pane
}

#[test]
fn render_pass_clears_then_draws_in_order() {
    let pane = demo_pane();
    let mut rec = Recorder::new();

    // Halfway through the first viewport height of scroll.
    pane.render(&mut rec, -50.0);

    assert_eq!(rec.commands[0], Command::FillColor(Rgb::WHITE));
    assert_eq!(rec.commands[1], Command::LineWidth(2.0));
    assert_eq!(
        rec.commands[2],
        Command::FillRect {
            x: 0.0,
            y: 0.0,
            w: 100.0,
            h: 100.0
        }
    );
    assert_eq!(rec.commands[3], Command::Translate { dx: 0.5, dy: 0.5 });
    assert_eq!(
        rec.commands.last(),
        Some(&Command::Translate { dx: -0.5, dy: -0.5 })
    );

    // Circle midway between its markers.
    assert!(rec.commands.contains(&Command::Arc {
        cx: 15.0,
        cy: 10.0,
        radius: 5.0
    }));

    // Caption at progress 0.5 of a 0..2 window: floor(0 + 5 * 0.25) = 1.
    assert!(rec.commands.contains(&Command::FillText {
        text: "h".into(),
        x: 50.0,
        y: 90.0
    }));
}

#[test]
fn progress_normalizes_scroll_offset_to_pane_height() {
    let pane = demo_pane();
    assert_eq!(pane.progress(0.0), 0.0);
    assert_eq!(pane.progress(-50.0), 0.5);
    assert_eq!(pane.progress(-250.0), 2.5);
}

#[test]
fn shapes_past_their_range_skip_but_others_still_draw() {
    let pane = demo_pane();
    let mut rec = Recorder::new();

    // Circle's markers end at 1.0; the caption's run to 2.0.
    pane.render(&mut rec, -150.0);

    // Caption at progress 1.5 of the 0..2 window: floor(5 * 0.75) = 3.
    assert!(!rec.commands.iter().any(|c| matches!(c, Command::Arc { .. })));
    assert!(rec.commands.contains(&Command::FillText {
        text: "hel".into(),
        x: 50.0,
        y: 90.0
    }));
}

#[test]
fn stack_height_below_one_is_rejected() {
    assert!(Pane::new(100.0, 100.0, 0.5).is_err());
    assert!(Pane::new(100.0, 100.0, 1.0).is_ok());
}

#[test]
fn non_positive_dimensions_are_rejected() {
    // A zero height would turn every progress value into NaN.
    assert!(Pane::new(100.0, 0.0, 1.0).is_err());
    assert!(Pane::new(0.0, 100.0, 1.0).is_err());
    assert!(Pane::new(-100.0, 100.0, 1.0).is_err());
}

#[test]
fn resize_changes_resolution_of_percent_distances() {
    let mut pane = Pane::new(100.0, 100.0, 1.0).unwrap();
    pane.add_shape(
        Shape::rectangle(vec![MarkerSpec::new(0.0)
            .with("x", "50w")
            .with("y", "0p")
            .with("w", "10w")
            .with("h", "10h")])
        .unwrap(),
    );

    pane.resize(200.0, 400.0);

    let mut rec = Recorder::new();
    pane.render(&mut rec, 0.0);

    assert!(rec.commands.contains(&Command::Rect {
        x: 100.0,
        y: 0.0,
        w: 20.0,
        h: 40.0
    }));
}
