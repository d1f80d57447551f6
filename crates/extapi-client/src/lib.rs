//! Thin JSON-over-HTTP client for external service APIs.
//!
//! One [`ApiClient`] per base URL. Calls return a [`Status`] that buckets the
//! response code; 4xx/5xx are statuses, not errors.
//!
//! ```no_run
//! use extapi_client::{bearer, ApiClient};
//! use serde::Deserialize;
//!
//! #[derive(Default, Deserialize)]
//! struct User {
//!     name: String,
//! }
//!
//! async fn example() -> Result<(), extapi_client::ApiError> {
//!     let client = ApiClient::new("https://api.example.com")?;
//!     client.set_authorization(bearer("token"));
//!
//!     let mut user = User::default();
//!     let status = client.get("/users/1", Some(&mut user)).await?;
//!     if status.is_error() {
//!         eprintln!("{status}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod status;

pub use client::ApiClient;
pub use config::{build_client, ClientConfig, DEFAULT_TIMEOUT};
pub use error::{ApiError, Result};
pub use request::{bearer, headers, join_url, JsonBody};
pub use response::decode_json;
pub use status::{Status, CLIENT_ERROR_MESSAGE, SERVER_ERROR_MESSAGE};
