//! Driving-directions client for cold-chain route rendering.
//!
//! Fetches road polylines for delivery legs from an AMap-style directions
//! endpoint, one request at a time with a configurable pause in between to
//! stay inside the provider's quota.

pub mod batch;
pub mod client;
pub mod config;
pub mod error;

pub use batch::{fetch_batch_paths, DirectionsProvider};
pub use client::AmapClient;
pub use config::DirectionsConfig;
pub use error::FetchError;
