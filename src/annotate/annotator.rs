use image::RgbaImage;

use crate::{
    annotate::options::AnnotateOptions,
    assets::codec::{decode_jpeg, encode_jpeg},
    foundation::core::Canvas,
    foundation::error::ApodResult,
    layout::sizer::{LayoutBox, size_layout},
    render::composite::composite,
    text::font::BitmapFace,
    text::wrap::wrap_lines,
};

/// Wrapped lines and their placement for one image.
#[derive(Clone, Debug, PartialEq)]
pub struct CaptionLayout {
    /// Rows in reading order.
    pub lines: Vec<String>,
    /// Measured block and panel geometry.
    pub layout: LayoutBox,
}

/// Burns captions into JPEG images.
///
/// Holds only configuration; every call works on its own buffers, so one
/// annotator can be shared freely between threads.
#[derive(Clone, Debug)]
pub struct Annotator {
    options: AnnotateOptions,
    face: BitmapFace,
}

impl Annotator {
    /// Build an annotator from `options`.
    pub fn new(options: AnnotateOptions) -> Self {
        let face = BitmapFace::new(options.font_scale);
        Self { options, face }
    }

    /// The configuration in use.
    pub fn options(&self) -> &AnnotateOptions {
        &self.options
    }

    /// The glyph face in use.
    pub fn face(&self) -> &BitmapFace {
        &self.face
    }

    /// Decode `jpeg`, burn `caption` into it and re-encode it as JPEG.
    ///
    /// # Errors
    ///
    /// [`crate::ApodError::Decode`] when `jpeg` is not a valid JPEG and
    /// [`crate::ApodError::Encode`] when the result cannot be serialized.
    pub fn annotate(&self, jpeg: &[u8], caption: &str) -> ApodResult<Vec<u8>> {
        let source = decode_jpeg(jpeg)?;
        let annotated = self.annotate_image(&source, caption);
        encode_jpeg(&annotated, self.options.quality)
    }

    /// Burn `caption` into a copy of an already decoded image.
    pub fn annotate_image(&self, source: &RgbaImage, caption: &str) -> RgbaImage {
        let canvas = Canvas {
            width: source.width(),
            height: source.height(),
        };
        let CaptionLayout { lines, layout } = self.layout_caption(canvas, caption);
        composite(source, &lines, &layout, &self.face, &self.options.style())
    }

    /// Wrap and size `caption` for an image of `canvas` dimensions.
    pub fn layout_caption(&self, canvas: Canvas, caption: &str) -> CaptionLayout {
        let placement = self.options.placement;
        let margin = self.options.margin;

        let max_width = placement.max_line_width(canvas, margin);
        let lines = wrap_lines(caption, max_width, &self.face);
        let layout = size_layout(&lines, &self.face, placement.origin(canvas, margin));
        CaptionLayout { lines, layout }
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(AnnotateOptions::default())
    }
}

/// [`Annotator::annotate`] with default options.
pub fn annotate(jpeg: &[u8], caption: &str) -> ApodResult<Vec<u8>> {
    Annotator::default().annotate(jpeg, caption)
}

#[cfg(test)]
#[path = "../../tests/unit/annotate/annotator.rs"]
mod tests;
