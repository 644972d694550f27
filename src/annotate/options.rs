use crate::{
    assets::codec::DEFAULT_JPEG_QUALITY,
    foundation::core::{Canvas, Point, Rgba8},
    render::composite::CaptionStyle,
    text::font::MAX_FONT_SCALE,
};

#[derive(Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
/// Where the caption block starts on the image.
pub enum Placement {
    /// First row starts at the image centre; text runs to the right edge.
    #[default]
    Center,
    /// First row starts `margin` pixels in from the top-left corner.
    TopLeft,
}

impl Placement {
    /// Top-left corner of the first text row on `canvas`.
    pub fn origin(self, canvas: Canvas, margin: u32) -> Point {
        match self {
            Self::Center => Point::new(
                f64::from(canvas.width / 2),
                f64::from(canvas.height / 2),
            ),
            Self::TopLeft => Point::new(f64::from(margin), f64::from(margin)),
        }
    }

    /// Width available to one text row before it reaches the right margin.
    ///
    /// Never below 1 so the wrap estimate stays finite on tiny images.
    pub fn max_line_width(self, canvas: Canvas, margin: u32) -> u32 {
        let avail = match self {
            Self::Center => (canvas.width - canvas.width / 2).saturating_sub(margin),
            Self::TopLeft => canvas.width.saturating_sub(margin.saturating_mul(2)),
        };
        avail.max(1)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Tunables for [`crate::Annotator`].
///
/// Every field has a default, so a partial JSON object such as
/// `{"placement": "top-left"}` is a valid configuration.
pub struct AnnotateOptions {
    /// Caption anchor.
    pub placement: Placement,
    /// Distance in pixels kept from the image edges.
    pub margin: u32,
    /// Panel fill, straight RGBA.
    pub panel_rgba: Rgba8,
    /// Text colour, straight RGBA.
    pub text_rgba: Rgba8,
    /// JPEG quality of the encoded result (1..=100).
    pub quality: u8,
    /// Integer magnification of the 8x8 bitmap face.
    pub font_scale: u32,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        let style = CaptionStyle::default();
        Self {
            placement: Placement::Center,
            margin: 16,
            panel_rgba: style.panel,
            text_rgba: style.text,
            quality: DEFAULT_JPEG_QUALITY,
            font_scale: 2,
        }
    }
}

impl AnnotateOptions {
    /// Parse options from a JSON object; missing fields take their defaults.
    ///
    /// The result is [`validate`](Self::validate)d.
    pub fn from_json(json: &str) -> crate::ApodResult<Self> {
        let opts: Self = serde_json::from_str(json)
            .map_err(|e| crate::ApodError::config(format!("annotate options: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Reject values the annotator cannot honour.
    pub fn validate(&self) -> crate::ApodResult<()> {
        if !(1..=MAX_FONT_SCALE).contains(&self.font_scale) {
            return Err(crate::ApodError::config(format!(
                "annotate options: font_scale {} outside 1..={MAX_FONT_SCALE}",
                self.font_scale
            )));
        }
        if !(1..=100).contains(&self.quality) {
            return Err(crate::ApodError::config(format!(
                "annotate options: quality {} outside 1..=100",
                self.quality
            )));
        }
        Ok(())
    }

    /// Colours as a compositor style.
    pub fn style(&self) -> CaptionStyle {
        CaptionStyle {
            panel: self.panel_rgba,
            text: self.text_rgba,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/annotate/options.rs"]
mod tests;
