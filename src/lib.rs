use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages the frontend sends to the background context.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "getBingWallpaper")]
    GetBingWallpaper,

    /// Any discriminator this relay does not recognize. Ignored here and left
    /// for other handlers to process.
    #[serde(other)]
    Unknown,
}

/// Outcome delivered back to the frontend for a single request.
///
/// Serializes to the wire shape the frontend matches on:
/// `{"success": true, "data": ...}` or `{"success": false, "error": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(into = "ResponseWire")]
pub enum Response {
    Success { data: Value },
    Failure { error: String },
}

impl Response {
    #[inline]
    pub fn success(data: Value) -> Self {
        Self::Success { data }
    }

    #[inline]
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure { error: error.into() }
    }
}

#[derive(Serialize)]
struct ResponseWire {
    success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<Response> for ResponseWire {
    fn from(response: Response) -> Self {
        match response {
            Response::Success { data } => Self { success: true, data: Some(data), error: None },
            Response::Failure { error } => Self { success: false, data: None, error: Some(error) },
        }
    }
}

mod error;
pub use error::Error;

mod relay;
pub use relay::{Relay, INVALID_WALLPAPER_DATA};

pub mod source;
pub mod transport;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Request, Response};

    #[test]
    fn recognized_discriminator_parses() {
        let request: Request = serde_json::from_value(json!({ "type": "getBingWallpaper" })).unwrap();
        assert_eq!(request, Request::GetBingWallpaper);
    }

    #[test]
    fn unrecognized_discriminator_parses_as_unknown() {
        let request: Request = serde_json::from_value(json!({ "type": "other" })).unwrap();
        assert_eq!(request, Request::Unknown);
    }

    #[test]
    fn success_wire_shape() {
        let data = json!({ "images": [{ "url": "a.jpg" }] });
        let wire = serde_json::to_value(Response::success(data.clone())).unwrap();
        assert_eq!(wire, json!({ "success": true, "data": data }));
    }

    #[test]
    fn failure_wire_shape() {
        let wire = serde_json::to_value(Response::failure("boom")).unwrap();
        assert_eq!(wire, json!({ "success": false, "error": "boom" }));
    }
}
