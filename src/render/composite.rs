use image::RgbaImage;

use crate::{
    foundation::core::{Canvas, PixelRect, Point, Rgba8},
    layout::sizer::LayoutBox,
    text::font::GlyphFace,
};

/// Premultiplied `[r, g, b, a]` pixel.
pub type PremulRgba8 = [u8; 4];

/// Colours used when burning a caption into an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptionStyle {
    /// Fill of the backing panel; translucent so the picture shows through.
    pub panel: Rgba8,
    /// Glyph colour.
    pub text: Rgba8,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            panel: Rgba8::new(0, 0, 0, 128),
            text: Rgba8::WHITE,
        }
    }
}

/// Premultiplied source-over.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// Burn `lines` into a copy of `source`.
///
/// The panel is filled first, clamped to the image, then every row is drawn at
/// [`LayoutBox::row_origin`]. With no lines the copy is returned untouched.
/// `source` itself is never modified.
pub fn composite<S, F>(
    source: &RgbaImage,
    lines: &[S],
    layout: &LayoutBox,
    face: &F,
    style: &CaptionStyle,
) -> RgbaImage
where
    S: AsRef<str>,
    F: GlyphFace + ?Sized,
{
    let mut canvas = source.clone();
    if lines.is_empty() || layout.is_empty() {
        return canvas;
    }

    let size = Canvas {
        width: canvas.width(),
        height: canvas.height(),
    };
    if let Some(panel) = PixelRect::clamped(layout.panel(), size) {
        fill_rect(&mut canvas, panel, style.panel);
    }

    for (i, line) in lines.iter().enumerate() {
        draw_text(&mut canvas, layout.row_origin(i), line.as_ref(), face, style.text);
    }
    canvas
}

/// Blend `color` over every pixel of `rect`.
pub fn fill_rect(canvas: &mut RgbaImage, rect: PixelRect, color: Rgba8) {
    let src = color.to_premul();
    for y in rect.y0..rect.y1 {
        for x in rect.x0..rect.x1 {
            blend_pixel(canvas, x, y, src, 255);
        }
    }
}

/// Draw one row of text with its cell top-left at `origin`, left-aligned.
///
/// Glyph pixels outside the canvas are dropped.
pub fn draw_text<F: GlyphFace + ?Sized>(
    canvas: &mut RgbaImage,
    origin: Point,
    text: &str,
    face: &F,
    color: Rgba8,
) {
    let src = color.to_premul();
    let (w, h) = (i64::from(canvas.width()), i64::from(canvas.height()));
    let mut pen_x = origin.x.round() as i64;
    let pen_y = origin.y.round() as i64;
    // Rows entirely above or below the canvas are not rasterised.
    if pen_y >= h || pen_y + i64::from(face.line_height()) <= 0 {
        return;
    }

    for ch in text.chars() {
        if pen_x >= w {
            break;
        }
        let glyph = face.glyph(ch);
        for (gx, gy, coverage) in glyph.covered() {
            let x = pen_x + i64::from(gx);
            let y = pen_y + i64::from(gy);
            if x < 0 || y < 0 || x >= w || y >= h {
                continue;
            }
            blend_pixel(canvas, x as u32, y as u32, src, coverage);
        }
        pen_x += i64::from(face.advance(ch));
    }
}

fn blend_pixel(canvas: &mut RgbaImage, x: u32, y: u32, src: PremulRgba8, coverage: u8) {
    let px = canvas.get_pixel_mut(x, y);
    let dst = premultiply(px.0);
    let out = over(dst, src, f32::from(coverage) / 255.0);
    px.0 = unpremultiply(out);
}

fn premultiply(px: [u8; 4]) -> PremulRgba8 {
    Rgba8::from(px).to_premul()
}

fn unpremultiply(px: PremulRgba8) -> [u8; 4] {
    let a = u16::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    if a == 255 {
        return px;
    }
    let un = |c: u8| ((u16::from(c) * 255 + a / 2) / a).min(255) as u8;
    [un(px[0]), un(px[1]), un(px[2]), px[3]]
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
