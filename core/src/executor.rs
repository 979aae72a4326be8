//! The request executor: one GET, body discarded, status returned.
//!
//! # Design
//! `fetch` keeps the error so Rust callers can inspect it. The
//! `fetch_status*` functions are the probe contract: they never fail, and
//! fold every error into [`SENTINEL_STATUS`] after reporting it once to a
//! [`Diagnostics`] sink. Nothing here holds state between calls, so the
//! functions can be called from any number of threads at once.

use crate::error::FetchError;
use crate::session::Session;
use crate::sink::DiscardSink;

/// Outcome meaning "no response was obtained". Never a real HTTP status.
pub const SENTINEL_STATUS: u16 = 0;

/// A completed transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fetched {
    pub status: u16,
    /// Body bytes accepted by the discard sink.
    pub body_bytes: u64,
}

/// Receives one report per failed transfer.
pub trait Diagnostics {
    fn report(&self, err: &FetchError);
}

impl<F> Diagnostics for F
where
    F: Fn(&FetchError),
{
    fn report(&self, err: &FetchError) {
        self(err)
    }
}

/// Reports failures through the `log` facade at error level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, err: &FetchError) {
        log::error!("fetch_status() failed: {}", err.reason());
    }
}

/// Perform one GET against `url`, discarding the body.
pub fn fetch(url: &str) -> Result<Fetched, FetchError> {
    let session = Session::open();
    let mut sink = DiscardSink::new();
    let status = session.get(url, &mut sink)?;
    Ok(Fetched {
        status,
        body_bytes: sink.accepted(),
    })
}

/// Like [`fetch`], for URLs that arrive as raw bytes.
pub fn fetch_bytes(url: &[u8]) -> Result<Fetched, FetchError> {
    let url = std::str::from_utf8(url)
        .map_err(|e| FetchError::InvalidUrl(format!("not valid UTF-8: {e}")))?;
    fetch(url)
}

/// Probe `url` and return its status, or `0` after logging the failure.
pub fn fetch_status(url: &str) -> u16 {
    fetch_status_with(url.as_bytes(), &LogDiagnostics)
}

/// Probe `url` and return its status, or `0` after reporting the failure to
/// `diagnostics` exactly once.
pub fn fetch_status_with<D>(url: &[u8], diagnostics: &D) -> u16
where
    D: Diagnostics + ?Sized,
{
    match fetch_bytes(url) {
        Ok(fetched) => fetched.status,
        Err(err) => {
            diagnostics.report(&err);
            SENTINEL_STATUS
        }
    }
}
