use super::*;
use crate::text::font::BitmapFace;

struct UnitMetrics;

impl FontMetrics for UnitMetrics {
    fn measure(&self, text: &str) -> u32 {
        text.chars().count() as u32
    }

    fn line_height(&self) -> u32 {
        2
    }
}

#[test]
fn width_is_widest_line_and_height_is_rows_times_line_height() {
    let lines = ["ab", "abcde", "abc"];
    let b = size_layout(&lines, &UnitMetrics, Point::new(10.0, 20.0));
    assert_eq!(b.width, 5);
    assert_eq!(b.height, 6);
    assert_eq!(b.line_count, 3);
    assert_eq!(b.line_height, 2);
}

#[test]
fn panel_contains_every_line() {
    let face = BitmapFace::new(2);
    let lines = vec![
        "Light from the".to_string(),
        "Andromeda Galaxy".to_string(),
        "left".to_string(),
    ];
    let b = size_layout(&lines, &face, Point::new(50.0, 40.0));
    let panel = b.panel();

    let widest = lines.iter().map(|l| face.measure(l)).max().unwrap();
    assert!(panel.width() >= f64::from(widest));
    assert!(panel.height() >= f64::from(face.line_height()) * lines.len() as f64);
    assert!(panel.contains(b.origin));
    for i in 0..lines.len() {
        assert!(panel.contains(b.row_origin(i)));
    }
}

#[test]
fn panel_is_inset_equally_on_both_axes() {
    let b = size_layout(&["abcd"], &UnitMetrics, Point::new(10.0, 10.0));
    let inset = f64::from(PANEL_INSET);
    let panel = b.panel();
    assert_eq!(panel.x0, 10.0 - inset);
    assert_eq!(panel.y0, 10.0 - inset);
    assert_eq!(panel.width(), 4.0 + 2.0 * inset);
    assert_eq!(panel.height(), 2.0 + 2.0 * inset);
}

#[test]
fn single_line_panel_is_one_line_high() {
    let face = BitmapFace::new(1);
    let b = size_layout(&["fits"], &face, Point::ZERO);
    assert_eq!(b.height, face.line_height());
}

#[test]
fn zero_lines_give_a_degenerate_box() {
    let empty: [&str; 0] = [];
    let b = size_layout(&empty, &UnitMetrics, Point::new(3.0, 4.0));
    assert!(b.is_empty());
    assert_eq!((b.width, b.height), (0, 0));
    assert_eq!(b.text_rect().area(), 0.0);
}

#[test]
fn rows_advance_by_exactly_one_line_height() {
    let origin = Point::new(7.0, 11.0);
    let first = row_origin(origin, 0, 13);
    assert_eq!(first, origin);
    let mut prev = first;
    for i in 1..10 {
        let p = row_origin(origin, i, 13);
        assert_eq!(p.x, origin.x);
        assert_eq!(p.y, first.y + 13.0 * i as f64);
        assert!(p.y > prev.y);
        prev = p;
    }
}
