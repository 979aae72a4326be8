//! Blocking HTTP probe for round-trip benchmarks.
//!
//! # Overview
//! Issues one GET per call, streams the response body into a sink that
//! discards it, and returns the numeric status code. Failures of any kind
//! produce the sentinel status `0` plus one diagnostic.
//!
//! # Design
//! - `Session` is scoped to a single call and released by `Drop`.
//! - `DiscardSink` accepts every body chunk in full and keeps only a count.
//! - `fetch` returns a typed `Result`; `fetch_status` is the sentinel API the
//!   C boundary exposes.
//! - No pooling, retries, timeouts or shared state.

pub mod error;
pub mod executor;
pub mod session;
pub mod sink;

pub use error::FetchError;
pub use executor::{
    fetch, fetch_bytes, fetch_status, fetch_status_with, Diagnostics, Fetched, LogDiagnostics,
    SENTINEL_STATUS,
};
pub use session::Session;
pub use sink::DiscardSink;
