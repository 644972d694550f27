use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use reqwest::Url;

use crate::{
    annotate::annotator::Annotator,
    apod::model::Apod,
    foundation::error::{ApodError, ApodResult},
};

/// How a downloaded image is written to disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreMode {
    /// JPEG: the caption is burned in before writing.
    Annotate,
    /// Any other format: bytes are written unchanged.
    Passthrough,
}

impl StoreMode {
    /// Pick the mode for a file extension (without the dot, any case).
    pub fn for_extension(ext: Option<&str>) -> Self {
        match ext.map(str::to_ascii_lowercase).as_deref() {
            Some("jpg" | "jpeg") => Self::Annotate,
            _ => Self::Passthrough,
        }
    }
}

/// `YYYYMMDDHHMMSS` file stem for `now`.
pub fn timestamp_name(now: &NaiveDateTime) -> String {
    now.format("%Y%m%d%H%M%S").to_string()
}

/// Extension of the last path segment of `url`, ignoring query and fragment.
pub fn url_extension(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let name = parsed.path_segments()?.next_back()?;
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_string())
}

/// Destination path for an image downloaded from `url` at `now`.
pub fn destination(dir: &Path, now: &NaiveDateTime, url: &str) -> PathBuf {
    let stem = timestamp_name(now);
    match url_extension(url) {
        Some(ext) => dir.join(format!("{stem}.{ext}")),
        None => dir.join(stem),
    }
}

/// Write one day's image into `dir`, annotating JPEGs with the explanation.
///
/// Creates `dir` when missing and returns the written path.
#[tracing::instrument(skip(apod, bytes, annotator), fields(title = %apod.title, len = bytes.len()))]
pub fn save_image(
    apod: &Apod,
    bytes: &[u8],
    dir: &Path,
    now: &NaiveDateTime,
    annotator: &Annotator,
) -> ApodResult<PathBuf> {
    let url = apod
        .image_url()
        .ok_or_else(|| ApodError::http("entry has no image url"))?;
    let path = destination(dir, now, url);

    let mode = StoreMode::for_extension(url_extension(url).as_deref());
    let out = match mode {
        StoreMode::Annotate => {
            tracing::info!(caption_chars = apod.explanation.chars().count(), "annotating jpeg");
            annotator.annotate(bytes, &apod.explanation)?
        }
        StoreMode::Passthrough => {
            tracing::info!("not a jpeg, storing unchanged");
            bytes.to_vec()
        }
    };

    std::fs::create_dir_all(dir)?;
    std::fs::write(&path, out)?;
    tracing::info!(path = %path.display(), "stored image");
    Ok(path)
}

#[cfg(test)]
#[path = "../../tests/unit/apod/store.rs"]
mod tests;
