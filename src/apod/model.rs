use crate::foundation::error::{ApodError, ApodResult};

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
/// One day's entry as returned by the APOD endpoint.
pub struct Apod {
    /// Publication date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: Option<String>,
    /// Entry title.
    #[serde(default)]
    pub title: String,
    /// Long-form caption; this is what gets burned into the image.
    #[serde(default)]
    pub explanation: String,
    /// `"image"` or `"video"` (other values are possible).
    pub media_type: String,
    /// Full resolution image URL.
    #[serde(default)]
    pub hdurl: Option<String>,
    /// Web-sized image URL, or the video page for video entries.
    #[serde(default)]
    pub url: Option<String>,
}

impl Apod {
    /// Parse an entry from the endpoint's JSON body.
    pub fn from_json(json: &str) -> ApodResult<Self> {
        serde_json::from_str(json).map_err(|e| ApodError::Other(anyhow::Error::new(e)))
    }

    /// Fail with [`ApodError::UnsupportedMedia`] unless this entry is a still image.
    pub fn ensure_image(&self) -> ApodResult<()> {
        if self.media_type != "image" {
            return Err(ApodError::unsupported_media(self.media_type.clone()));
        }
        Ok(())
    }

    /// Best image URL: `hdurl`, falling back to `url`.
    pub fn image_url(&self) -> Option<&str> {
        fn non_empty(u: &Option<String>) -> Option<&str> {
            u.as_deref().filter(|u| !u.is_empty())
        }
        non_empty(&self.hdurl).or_else(|| non_empty(&self.url))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/apod/model.rs"]
mod tests;
