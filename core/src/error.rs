//! Error types for a single probe transfer.
//!
//! # Design
//! The public probe API never returns these: every failure folds into the
//! `0` sentinel status. They exist so the executor can produce one short
//! diagnostic per failure, and so Rust callers that want the detail can use
//! `probe_core::fetch` directly.

use std::io;

/// Why a transfer did not produce a status code.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The URL could not be handed to the transport at all (not UTF-8, or a
    /// null pointer at the C boundary).
    #[error("malformed url: {0}")]
    InvalidUrl(String),

    /// The host name in the URL did not resolve to any address.
    #[error("name not resolved: {0}")]
    Resolve(#[source] io::Error),

    /// The transport failed before a response head was received.
    #[error("transfer failed: {0}")]
    Transport(#[from] ureq::Error),

    /// The response head arrived but the body could not be drained.
    #[error("body transfer failed: {0}")]
    Body(#[source] io::Error),

    /// A panic was caught at the C boundary.
    #[error("internal panic: {0}")]
    Panic(String),
}

impl FetchError {
    /// Short machine-readable reason, the text written to the diagnostic
    /// stream.
    pub fn reason(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl(_) => "malformed url",
            FetchError::Resolve(_) => "name not resolved",
            FetchError::Transport(err) => transport_reason(err),
            FetchError::Body(err) => io_reason(err),
            FetchError::Panic(_) => "internal panic",
        }
    }
}

fn transport_reason(err: &ureq::Error) -> &'static str {
    match err {
        ureq::Error::HostNotFound => "name not resolved",
        ureq::Error::ConnectionFailed => "connection failed",
        ureq::Error::Timeout(_) => "timed out",
        ureq::Error::Http(_) | ureq::Error::BadUri(_) => "malformed url",
        ureq::Error::Protocol(_) => "protocol error",
        ureq::Error::Tls(_) => "tls handshake failed",
        ureq::Error::TooManyRedirects | ureq::Error::RedirectFailed => "redirect failed",
        ureq::Error::Io(io) => io_reason(io),
        _ => "transport failure",
    }
}

fn io_reason(err: &io::Error) -> &'static str {
    match err.kind() {
        io::ErrorKind::ConnectionRefused => "connection refused",
        io::ErrorKind::ConnectionReset | io::ErrorKind::ConnectionAborted => "connection reset",
        io::ErrorKind::UnexpectedEof => "premature close",
        io::ErrorKind::TimedOut => "timed out",
        io::ErrorKind::AddrNotAvailable => "address not available",
        _ => "i/o error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_reason() {
        let err = FetchError::InvalidUrl("null pointer".to_string());
        assert_eq!(err.reason(), "malformed url");
        assert_eq!(err.to_string(), "malformed url: null pointer");
    }

    #[test]
    fn io_kinds_map_to_short_reasons() {
        let refused = FetchError::Transport(ureq::Error::Io(io::Error::from(
            io::ErrorKind::ConnectionRefused,
        )));
        assert_eq!(refused.reason(), "connection refused");

        let eof = FetchError::Body(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert_eq!(eof.reason(), "premature close");
    }

    #[test]
    fn lookup_failures_share_one_reason() {
        let err = FetchError::from(ureq::Error::HostNotFound);
        assert_eq!(err.reason(), "name not resolved");

        let err = FetchError::Resolve(io::Error::other("failed to lookup address information"));
        assert_eq!(err.reason(), "name not resolved");
    }
}
