use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::source::WallpaperSource;
use crate::{Request, Response};

/// Failure string the frontend matches on ("invalid Bing wallpaper data").
/// Kept literal for wire compatibility.
pub const INVALID_WALLPAPER_DATA: &str = "无效的必应壁纸数据";

/// Bridges one frontend request to the upstream wallpaper API.
///
/// Holds no state between invocations beyond the source itself; each request
/// is independent and makes at most one upstream call.
#[derive(Clone, Debug, Default)]
pub struct Relay<S> {
    source: S,
}

impl<S: WallpaperSource> Relay<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Handles one incoming message.
    ///
    /// Returns `None` when the discriminator is not recognized: no upstream
    /// call is made and no response is sent, so the transport's default
    /// behavior applies. Otherwise every outcome, including upstream faults,
    /// is returned as a [`Response`]; no error escapes this method.
    #[instrument(name = "Relay:handle", level = "trace", skip(self))]
    pub async fn handle(&self, request: Request) -> Option<Response> {
        match request {
            Request::GetBingWallpaper => Some(self.fetch_wallpaper().await),
            Request::Unknown => None,
        }
    }

    async fn fetch_wallpaper(&self) -> Response {
        match self.source.fetch_archive().await {
            Ok(body) if has_images(&body) => {
                debug! { archive = ?body };
                Response::success(body)
            }
            Ok(_) => Response::failure(INVALID_WALLPAPER_DATA),
            Err(err) => {
                error! { ?err };
                Response::failure(err.to_string())
            }
        }
    }
}

fn has_images(body: &Value) -> bool {
    body.get("images")
        .and_then(Value::as_array)
        .map_or(false, |images| !images.is_empty())
}
