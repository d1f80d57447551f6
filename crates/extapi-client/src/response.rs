//! Response-side helpers.

use serde::de::{DeserializeOwned, Error as _};

use crate::error::ApiError;
use crate::status::Status;

/// Decode the first JSON value in `bytes`.
///
/// Anything after that value is ignored. An empty or whitespace-only body is
/// an error.
pub fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, serde_json::Error> {
    let mut values = serde_json::Deserializer::from_slice(bytes).into_iter::<T>();
    match values.next() {
        Some(result) => result,
        None => Err(serde_json::Error::custom("unexpected end of response body")),
    }
}

/// Read a success response and decode it into `target`.
///
/// `target` is only written when decoding succeeds.
pub(crate) async fn decode_into<T: DeserializeOwned>(
    response: reqwest::Response,
    status: Status,
    target: &mut T,
) -> Result<Status, ApiError> {
    let bytes = match response.bytes().await {
        Ok(bytes) => bytes,
        Err(source) => return Err(ApiError::Body { status, source }),
    };

    match decode_json(&bytes) {
        Ok(value) => {
            *target = value;
            Ok(status)
        }
        Err(source) => Err(ApiError::Decode { status, source }),
    }
}
