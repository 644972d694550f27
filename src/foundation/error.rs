/// Convenience result type used across the crate.
pub type ApodResult<T> = Result<T, ApodError>;

/// Error taxonomy shared by the annotation core and the fetch/store shell.
#[derive(thiserror::Error, Debug)]
pub enum ApodError {
    /// Input bytes are not a valid image of the annotation codec.
    #[error("decode error: {0}")]
    Decode(String),

    /// The annotated buffer could not be serialized.
    #[error("encode error: {0}")]
    Encode(String),

    /// The daily entry is not a still image (video, interactive page, ...).
    #[error("unsupported media type: {0}")]
    UnsupportedMedia(String),

    /// Transport failure or non-success HTTP status.
    #[error("http error: {0}")]
    Http(String),

    /// Missing or invalid process configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Filesystem failure while storing the result.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApodError {
    /// Build an [`ApodError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build an [`ApodError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build an [`ApodError::UnsupportedMedia`] value.
    pub fn unsupported_media(media_type: impl Into<String>) -> Self {
        Self::UnsupportedMedia(media_type.into())
    }

    /// Build an [`ApodError::Http`] value.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Build an [`ApodError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<reqwest::Error> for ApodError {
    fn from(err: reqwest::Error) -> Self {
        match err.url() {
            Some(url) => Self::Http(format!("{url}: {err}")),
            None => Self::Http(err.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
