use crate::{
    foundation::core::{Point, Rect},
    text::font::FontMetrics,
};

/// Inset between the text block and the edge of its backing panel, per side.
pub const PANEL_INSET: u32 = 4;

/// Size and position of a wrapped caption block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutBox {
    /// Top-left corner of the first text row.
    pub origin: Point,
    /// Widest measured line, in whole pixels.
    pub width: u32,
    /// `line_height * line_count`.
    pub height: u32,
    /// Vertical advance between rows.
    pub line_height: u32,
    /// Number of rows laid out.
    pub line_count: usize,
}

impl LayoutBox {
    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.line_count == 0
    }

    /// Rectangle covered by the text rows themselves.
    pub fn text_rect(&self) -> Rect {
        Rect::from_origin_size(
            self.origin,
            (f64::from(self.width), f64::from(self.height)),
        )
    }

    /// Backing panel: the text rectangle grown by [`PANEL_INSET`] on every side.
    ///
    /// Not clipped to any canvas; the compositor clamps it when painting.
    pub fn panel(&self) -> Rect {
        let inset = f64::from(PANEL_INSET);
        self.text_rect().inflate(inset, inset)
    }

    /// Top-left position of row `index`.
    pub fn row_origin(&self, index: usize) -> Point {
        row_origin(self.origin, index, self.line_height)
    }
}

/// Top-left position of row `index` in a block starting at `origin`.
pub fn row_origin(origin: Point, index: usize, line_height: u32) -> Point {
    Point::new(
        origin.x,
        origin.y + (index as f64) * f64::from(line_height),
    )
}

/// Measure `lines` and place the resulting block at `origin`.
///
/// An empty `lines` slice yields a zero-area box.
pub fn size_layout<S, M>(lines: &[S], metrics: &M, origin: Point) -> LayoutBox
where
    S: AsRef<str>,
    M: FontMetrics + ?Sized,
{
    let line_height = metrics.line_height();
    let width = lines
        .iter()
        .map(|l| metrics.measure(l.as_ref()))
        .max()
        .unwrap_or(0);
    let count = u32::try_from(lines.len()).unwrap_or(u32::MAX);

    LayoutBox {
        origin,
        width,
        height: line_height.saturating_mul(count),
        line_height,
        line_count: lines.len(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/sizer.rs"]
mod tests;
