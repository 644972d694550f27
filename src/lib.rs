//! Burn the daily astronomy picture's caption into the picture itself.
//!
//! The crate is split into a pure, in-memory annotation core and a thin shell
//! that talks to the APOD service and the filesystem.
//!
//! # Annotation pipeline
//!
//! 1. **Decode**: JPEG bytes -> RGBA8 buffer ([`decode_jpeg`])
//! 2. **Wrap**: caption -> lines, budgeted by the image width ([`wrap_lines`])
//! 3. **Size**: lines -> [`LayoutBox`] with a backing panel ([`size_layout`])
//! 4. **Composite**: panel + glyph rows over a copy of the image ([`composite`])
//! 5. **Encode**: RGBA8 buffer -> JPEG at quality 95 ([`encode_jpeg`])
//!
//! [`Annotator`] runs all five steps. The core does no IO, keeps no global
//! state and does not log; logging belongs to the shell ([`fetch_and_store`],
//! the `apod` binary).
//!
//! Line breaking uses character count as a stand-in for pixel width, see
//! [`wrap_lines`].
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod annotate;
mod apod;
mod assets;
mod foundation;
mod layout;
mod render;
mod text;

pub use annotate::annotator::{Annotator, CaptionLayout, annotate};
pub use annotate::options::{AnnotateOptions, Placement};
pub use apod::client::{APOD_ENDPOINT, ApodClient, DEMO_KEY};
pub use apod::fetch_and_store;
pub use apod::model::Apod;
pub use apod::store::{StoreMode, destination, save_image, timestamp_name, url_extension};
pub use assets::codec::{DEFAULT_JPEG_QUALITY, decode_jpeg, encode_jpeg};
pub use foundation::core::{Canvas, PixelRect, Point, Rect, Rgba8};
pub use foundation::error::{ApodError, ApodResult};
pub use layout::sizer::{LayoutBox, PANEL_INSET, row_origin, size_layout};
pub use render::composite::{
    CaptionStyle, PremulRgba8, composite, draw_text, fill_rect, over,
};
pub use text::font::{BitmapFace, FontMetrics, GlyphFace, GlyphMask, MAX_FONT_SCALE};
pub use text::wrap::{char_budget, greedy_lines, wrap_lines};
