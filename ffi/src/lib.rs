//! C-ABI wrapper around `probe-core`.
//!
//! # Overview
//! Exposes the probe as a single `extern "C"` function so any host with a C
//! FFI (Python `ctypes`, for instance) can time one GET round trip without
//! linking to an HTTP stack of its own:
//!
//! ```c
//! long status = fetch_status("http://127.0.0.1:5000/");
//! ```
//!
//! # Design
//! - The entry point wraps its body in `catch_unwind` so panics never cross
//!   the FFI boundary; a caught panic is reported and yields `0`.
//! - The host owns the URL string; nothing is allocated for the caller and
//!   there is nothing to free.
//! - Failures are reported once to stderr through `log`/`env_logger`, and the
//!   return value is the only error channel.

mod logging;

use std::any::Any;
use std::ffi::CStr;
use std::os::raw::{c_char, c_long};
use std::panic::catch_unwind;

use probe_core::{Diagnostics, FetchError, LogDiagnostics, SENTINEL_STATUS};

/// Issue one GET against `url`, discard the body, and return the status.
///
/// Returns 0 if no response was obtained: a null or non-UTF-8 `url`, a URL
/// the transport cannot parse, or any connection or transfer failure. Each
/// failure writes one line to stderr.
///
/// `url` must be null or point to a NUL-terminated string that stays valid
/// for the duration of the call.
#[unsafe(no_mangle)]
pub extern "C" fn fetch_status(url: *const c_char) -> c_long {
    logging::init();
    let status = catch_unwind(|| {
        if url.is_null() {
            LogDiagnostics.report(&FetchError::InvalidUrl("null pointer".to_string()));
            return SENTINEL_STATUS;
        }
        let url = unsafe { CStr::from_ptr(url) };
        probe_core::fetch_status_with(url.to_bytes(), &LogDiagnostics)
    })
    .unwrap_or_else(|payload| {
        LogDiagnostics.report(&FetchError::Panic(panic_message(payload.as_ref())));
        SENTINEL_STATUS
    });
    c_long::from(status)
}

/// Alias of `fetch_status` under the symbol older host scripts load.
#[unsafe(no_mangle)]
pub extern "C" fn http_get(url: *const c_char) -> c_long {
    fetch_status(url)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "panic in fetch_status".to_string()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
