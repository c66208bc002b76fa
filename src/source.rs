use std::future::Future;

use serde_json::Value;

use crate::Error;

/// Capability of fetching the decoded wallpaper-archive body from upstream.
///
/// The body is kept as an opaque [`Value`]; nothing downstream re-shapes it.
pub trait WallpaperSource {
    fn fetch_archive(&self) -> impl Future<Output = Result<Value, Error>> + Send;
}

pub mod bing;
