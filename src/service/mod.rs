//! HTTP transport for the accounting record store.
//!
//! Requires the `http` feature. Uses axum for routing and tokio signals for
//! the shutdown-triggered cleanup.

pub mod lifecycle;

mod http;

pub use http::{router, serve};
