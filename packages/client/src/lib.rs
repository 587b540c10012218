//! Typed HTTP client for the Mitra API.
//!
//! [`ApiClient`] turns catalog [`Endpoint`](mitra_api::Endpoint)s into HTTP
//! calls, checks response bodies against their declared shape, and
//! normalizes every failure into an [`ApiError`]. [`submit`] validates raw
//! form input first so that invalid input is never sent.
//!
//! ```rust,no_run
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use mitra_client::{ApiClient, ClientConfig};
//! use serde_json::json;
//!
//! let client = ApiClient::new(&ClientConfig::from_env()?)?;
//! let entry = client.submit_mood("s-1", &json!({ "mood": 4 })).await?;
//! println!("{:?}", entry.data);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod global;
pub mod pipeline;
pub mod request;

pub use client::ApiClient;
pub use config::{ClientConfig, ConfigError};
pub use endpoints::ApiResult;
pub use error::ApiError;
pub use global::GlobalError;
pub use pipeline::{submit, SubmitError};
pub use request::RequestDescriptor;
