use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};

/// Width/height measurement for a single fixed face.
///
/// Widths are whole pixels. Measuring never fails; the empty string is 0 wide.
pub trait FontMetrics {
    /// Horizontal extent of `text` when drawn with this face.
    fn measure(&self, text: &str) -> u32;

    /// Constant vertical advance between consecutive rows.
    fn line_height(&self) -> u32;
}

/// A face that can also rasterize its glyphs.
pub trait GlyphFace: FontMetrics {
    /// Coverage mask for `ch`, anchored at the top-left of its cell.
    ///
    /// Characters the face does not know produce an empty mask of the usual
    /// cell size, so the pen still advances over them.
    fn glyph(&self, ch: char) -> GlyphMask;

    /// Horizontal advance of `ch`.
    fn advance(&self, ch: char) -> u32;
}

/// 8-bit coverage mask of one rasterized glyph, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphMask {
    width: u32,
    height: u32,
    coverage: Vec<u8>,
}

impl GlyphMask {
    /// A fully transparent mask.
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0; (width as usize) * (height as usize)],
        }
    }

    /// Mask width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Coverage at `(x, y)`; 0 outside the mask.
    pub fn coverage(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.coverage[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Iterate the covered pixels as `(x, y, coverage)`.
    pub fn covered(&self) -> impl Iterator<Item = (u32, u32, u8)> + '_ {
        let w = self.width.max(1) as usize;
        self.coverage
            .iter()
            .enumerate()
            .filter(|(_, c)| **c != 0)
            .map(move |(i, c)| ((i % w) as u32, (i / w) as u32, *c))
    }
}

const CELL_PX: u32 = 8;
/// Largest accepted magnification; a glyph cell is then 512px square.
pub const MAX_FONT_SCALE: u32 = 64;
// Extra rows between glyph cells; 8 + 5 gives the familiar 13px text row.
const LEADING_PX: u32 = 5;

/// Monospace 8x8 bitmap face (ASCII + Latin-1), scaled by an integer factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapFace {
    scale: u32,
}

impl BitmapFace {
    /// Create a face scaled by `scale`, clamped to `1..=MAX_FONT_SCALE`.
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.clamp(1, MAX_FONT_SCALE),
        }
    }

    /// Integer scale factor.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Side of one glyph cell in pixels.
    pub fn cell(&self) -> u32 {
        CELL_PX * self.scale
    }

    fn bitmap(ch: char) -> Option<[u8; 8]> {
        BASIC_FONTS.get(ch).or_else(|| LATIN_FONTS.get(ch))
    }
}

impl Default for BitmapFace {
    fn default() -> Self {
        Self::new(1)
    }
}

impl FontMetrics for BitmapFace {
    fn measure(&self, text: &str) -> u32 {
        let n = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        n.saturating_mul(self.cell())
    }

    fn line_height(&self) -> u32 {
        (CELL_PX + LEADING_PX) * self.scale
    }
}

impl GlyphFace for BitmapFace {
    fn glyph(&self, ch: char) -> GlyphMask {
        let side = self.cell();
        let mut mask = GlyphMask::empty(side, side);
        let Some(rows) = Self::bitmap(ch) else {
            return mask;
        };

        let s = self.scale as usize;
        let stride = side as usize;
        for (gy, bits) in rows.iter().enumerate() {
            for gx in 0..8usize {
                // Bit 0 is the leftmost column.
                if (bits >> gx) & 1 == 0 {
                    continue;
                }
                for sy in 0..s {
                    let row = (gy * s + sy) * stride;
                    for sx in 0..s {
                        mask.coverage[row + gx * s + sx] = 255;
                    }
                }
            }
        }
        mask
    }

    fn advance(&self, _ch: char) -> u32 {
        self.cell()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
