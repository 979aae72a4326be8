//! Per-call transport context.
//!
//! # Design
//! A `Session` owns a fresh `ureq::Agent`, so its connection pool lives and
//! dies with one call: nothing is reused across calls and every call pays
//! the full connection setup. Dropping the session closes whatever socket
//! the agent still holds, which is how release happens on every exit path
//! including `?` returns.
//!
//! The agent is configured to behave like a default libcurl easy handle:
//! non-2xx statuses are data, redirects are reported rather than followed,
//! and no timeout is set. ureq leaves all of its timeouts unset by default,
//! so a stalled peer blocks the calling thread until the operating system
//! gives up on the socket.

use std::io;
use std::net::ToSocketAddrs;

use ureq::http::Uri;
use ureq::Agent;

use crate::error::FetchError;

/// One configured transport context, bound to a single request.
#[derive(Debug)]
pub struct Session {
    agent: Agent,
}

impl Session {
    /// Acquire a new session. Agent construction allocates no sockets and
    /// cannot fail; the connection is opened by `get`.
    pub fn open() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .max_redirects(0)
            .max_redirects_will_error(false)
            .build()
            .new_agent();
        log::debug!("session opened");
        Self { agent }
    }

    /// Issue a GET for `url`, stream the body into `sink`, and return the
    /// response status.
    ///
    /// A body that fails mid-stream is an error even though the status line
    /// was already read.
    pub fn get<W: io::Write>(&self, url: &str, sink: &mut W) -> Result<u16, FetchError> {
        let mut response = match self.agent.get(url).call() {
            Ok(response) => response,
            // ureq surfaces a failed lookup as a plain I/O error.
            Err(ureq::Error::Io(err)) if !host_resolves(url) => {
                return Err(FetchError::Resolve(err));
            }
            Err(err) => return Err(err.into()),
        };
        let status = response.status().as_u16();
        let drained = io::copy(&mut response.body_mut().as_reader(), sink)
            .map_err(FetchError::Body)?;
        log::debug!("GET {url} -> {status} ({drained} body bytes discarded)");
        Ok(status)
    }
}

/// Whether the host named in `url` resolves to at least one address. URLs
/// that cannot be parsed count as resolving so their own error is kept.
pub(crate) fn host_resolves(url: &str) -> bool {
    let Ok(uri) = url.parse::<Uri>() else {
        return true;
    };
    let Some(host) = uri.host() else {
        return true;
    };
    let host = host.trim_start_matches('[').trim_end_matches(']');
    let port = uri.port_u16().unwrap_or(match uri.scheme_str() {
        Some("https") => 443,
        _ => 80,
    });
    (host, port)
        .to_socket_addrs()
        .map(|mut addrs| addrs.next().is_some())
        .unwrap_or(false)
}

impl Drop for Session {
    fn drop(&mut self) {
        log::debug!("session released");
    }
}
