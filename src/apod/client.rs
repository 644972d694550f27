use std::time::Duration;

use reqwest::{Url, blocking::Client};

use crate::{
    apod::model::Apod,
    foundation::error::{ApodError, ApodResult},
};

/// Public APOD endpoint.
pub const APOD_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";

/// Rate-limited key accepted by the endpoint when none is configured.
pub const DEMO_KEY: &str = "DEMO_KEY";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the APOD metadata endpoint and the image host.
#[derive(Clone, Debug)]
pub struct ApodClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl ApodClient {
    /// Client for the public endpoint. An empty or missing key means [`DEMO_KEY`].
    pub fn new(api_key: Option<&str>) -> ApodResult<Self> {
        Self::with_endpoint(APOD_ENDPOINT, api_key)
    }

    /// Client for a custom endpoint (mirrors, test servers).
    pub fn with_endpoint(endpoint: impl Into<String>, api_key: Option<&str>) -> ApodResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()?;
        let api_key = api_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or(DEMO_KEY)
            .to_string();
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    /// The key sent with metadata requests.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Fully built metadata request URL.
    pub fn metadata_url(&self) -> ApodResult<Url> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| ApodError::config(format!("endpoint '{}': {e}", self.endpoint)))?;
        url.query_pairs_mut().append_pair("api_key", &self.api_key);
        Ok(url)
    }

    /// Fetch today's entry.
    ///
    /// # Errors
    ///
    /// [`ApodError::Http`] on transport failure or a non-success status, and
    /// [`ApodError::UnsupportedMedia`] when the entry is not an image.
    #[tracing::instrument(skip(self))]
    pub fn fetch_metadata(&self) -> ApodResult<Apod> {
        let url = self.metadata_url()?;
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApodError::http(format!("unsuccessful request: {status}")));
        }

        let body = resp.text()?;
        let apod = Apod::from_json(&body)?;
        tracing::info!(title = %apod.title, media_type = %apod.media_type, "fetched metadata");
        apod.ensure_image()?;
        Ok(apod)
    }

    /// Download the entry's image bytes, preferring the HD variant.
    #[tracing::instrument(skip(self, apod), fields(title = %apod.title))]
    pub fn fetch_image(&self, apod: &Apod) -> ApodResult<Vec<u8>> {
        let url = apod
            .image_url()
            .ok_or_else(|| ApodError::http("entry has no image url"))?;
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "image download failed");
            return Err(ApodError::http(format!("unable to download {url}: {status}")));
        }

        let bytes = resp.bytes()?;
        tracing::debug!(%url, len = bytes.len(), "downloaded image");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/apod/client.rs"]
mod tests;
