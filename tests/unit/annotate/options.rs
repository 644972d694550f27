use super::*;

const CANVAS: Canvas = Canvas {
    width: 800,
    height: 600,
};

#[test]
fn defaults_match_original_look() {
    let o = AnnotateOptions::default();
    assert_eq!(o.placement, Placement::Center);
    assert_eq!(o.quality, 95);
    assert_eq!(o.panel_rgba, Rgba8::new(0, 0, 0, 128));
    assert_eq!(o.text_rgba, Rgba8::WHITE);
    assert_eq!(o.style(), CaptionStyle::default());
}

#[test]
fn center_placement_starts_mid_image_with_half_width_budget() {
    assert_eq!(Placement::Center.origin(CANVAS, 16), Point::new(400.0, 300.0));
    assert_eq!(Placement::Center.max_line_width(CANVAS, 16), 384);
}

#[test]
fn top_left_placement_respects_margin_on_both_sides() {
    assert_eq!(Placement::TopLeft.origin(CANVAS, 16), Point::new(16.0, 16.0));
    assert_eq!(Placement::TopLeft.max_line_width(CANVAS, 16), 768);
}

#[test]
fn tiny_canvas_keeps_a_positive_budget() {
    let tiny = Canvas {
        width: 3,
        height: 3,
    };
    assert_eq!(Placement::Center.max_line_width(tiny, 16), 1);
    assert_eq!(Placement::TopLeft.max_line_width(tiny, 16), 1);
}

#[test]
fn partial_json_fills_in_defaults() {
    let o = AnnotateOptions::from_json(r#"{"placement": "top-left", "font_scale": 3}"#).unwrap();
    assert_eq!(o.placement, Placement::TopLeft);
    assert_eq!(o.font_scale, 3);
    assert_eq!(o.margin, AnnotateOptions::default().margin);

    let o = AnnotateOptions::from_json(r#"{"panel_rgba": [10, 20, 30, 200]}"#).unwrap();
    assert_eq!(o.panel_rgba, Rgba8::new(10, 20, 30, 200));
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = AnnotateOptions::from_json(r#"{"placement": "bottom"}"#).unwrap_err();
    assert!(matches!(err, crate::ApodError::Config(_)), "{err}");
}

#[test]
fn oversized_font_scale_is_a_config_error() {
    let err = AnnotateOptions::from_json(r#"{"font_scale": 1000000000}"#).unwrap_err();
    assert!(matches!(err, crate::ApodError::Config(_)), "{err}");
    assert!(err.to_string().contains("font_scale"));
}

#[test]
fn zero_font_scale_and_quality_are_rejected() {
    assert!(AnnotateOptions::from_json(r#"{"font_scale": 0}"#).is_err());
    assert!(AnnotateOptions::from_json(r#"{"quality": 0}"#).is_err());
}

#[test]
fn largest_font_scale_is_accepted() {
    let o = AnnotateOptions::from_json(&format!(r#"{{"font_scale": {MAX_FONT_SCALE}}}"#)).unwrap();
    assert_eq!(o.font_scale, MAX_FONT_SCALE);
}
