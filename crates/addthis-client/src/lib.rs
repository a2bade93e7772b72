//! AddThis Analytics Client SDK.
//!
//! This crate provides a client library for the AddThis Analytics API.
//! A request names a metric and a dimension, e.g. `shares` by `day`, and is
//! sent as `GET https://api.addthis.com/analytics/1.0/pub/{metric}/{dimension}.json`
//! with HTTP Basic authentication.
//!
//! # Example
//!
//! ```no_run
//! use addthis_client::AddthisClient;
//!
//! # async fn example() -> Result<(), addthis_client::ClientError> {
//! let client = AddthisClient::new("user@example.com", "password", Some("ra-123".to_string()))?;
//!
//! // Shares per day for the default profile
//! let shares = client.metric("shares").dimension("day").send().await?;
//!
//! // Clicks per continent for another profile over the last month
//! let clicks = client
//!     .metric("clicks")
//!     .dimension("continent")
//!     .pubid("ra-456")
//!     .param("period", "month")
//!     .send()
//!     .await?;
//!
//! println!("{shares}\n{clicks}");
//! # Ok(())
//! # }
//! ```
//!
//! A path can also be assembled segment by segment; the segment count is
//! checked when the request is sent:
//!
//! ```no_run
//! # async fn example(client: addthis_client::AddthisClient) {
//! let err = client.segment("shares").send().await.unwrap_err();
//! assert!(err.is_validation());
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod blocking;
mod client;
mod config;
mod endpoint;
mod error;
mod request;
mod types;

pub use client::AddthisClient;
pub use config::{AddthisConfig, ClientOptions, DEFAULT_TIMEOUT_SECONDS};
pub use endpoint::{ClientContext, Endpoint, MetricRequest, PendingRequest};
pub use error::ClientError;
pub use types::*;
