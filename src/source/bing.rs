use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use super::WallpaperSource;
use crate::Error;

/// Bing homepage-image archive endpoint. The query parameters are fixed;
/// nothing from the incoming request reaches the URL.
pub const BING_IMAGE_ARCHIVE_URL: &str =
    "https://cn.bing.com/HPImageArchive.aspx?format=js&idx=0&n=8";

/// Upstream source backed by the public Bing HPImageArchive API.
///
/// No timeout is enforced here; whatever the underlying client provides
/// applies.
#[derive(Clone, Debug, Default)]
pub struct BingSource {
    client: Client,
}

impl BingSource {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl WallpaperSource for BingSource {
    #[instrument(name = "BingSource:fetch_archive", level = "trace", skip(self))]
    async fn fetch_archive(&self) -> Result<Value, Error> {
        let response = self.client.get(BING_IMAGE_ARCHIVE_URL).send().await?;
        debug! { status = %response.status() };

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
