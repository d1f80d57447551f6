//! Request-side helpers: headers, URL joining, body encoding.

use serde::Serialize;

use crate::error::ApiError;

/// Header values sent on every call.
pub mod headers {
    pub const CONTENT_TYPE_JSON: &str = "application/json";
    pub const BEARER_PREFIX: &str = "Bearer ";
}

/// Append `path` to `base` verbatim.
///
/// No slash handling, normalisation or escaping: `"http://h/api" + "v1"`
/// yields `"http://h/apiv1"`.
pub fn join_url(base: &str, path: &str) -> String {
    let mut url = String::with_capacity(base.len() + path.len());
    url.push_str(base);
    url.push_str(path);
    url
}

/// Format a bearer credential for the `Authorization` header.
pub fn bearer(token: impl AsRef<str>) -> String {
    format!("{}{}", headers::BEARER_PREFIX, token.as_ref())
}

/// JSON request body wrapper.
#[derive(Debug, Clone)]
pub struct JsonBody<'a, T: ?Sized>(pub &'a T);

impl<T: Serialize + ?Sized> JsonBody<'_, T> {
    /// Serialize to JSON bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ApiError> {
        serde_json::to_vec(self.0).map_err(ApiError::Serialize)
    }
}
