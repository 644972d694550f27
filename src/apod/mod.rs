pub(crate) mod client;
pub(crate) mod model;
pub(crate) mod store;

use std::path::{Path, PathBuf};

use crate::{annotate::annotator::Annotator, foundation::error::ApodResult};

/// Fetch today's entry, download its image and store it (annotated when JPEG).
///
/// Any failure aborts the run; nothing is retried.
#[tracing::instrument(skip(client, annotator))]
pub fn fetch_and_store(
    client: &client::ApodClient,
    dir: &Path,
    annotator: &Annotator,
) -> ApodResult<PathBuf> {
    let apod = client.fetch_metadata()?;
    let bytes = client.fetch_image(&apod)?;
    let now = chrono::Local::now().naive_local();
    store::save_image(&apod, &bytes, dir, &now, annotator)
}
