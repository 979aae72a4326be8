//! Logger installation for foreign hosts.
//!
//! A host loading the library through its C ABI never runs Rust's `main`, so
//! nothing installs a `log` backend. The first entry-point call installs
//! `env_logger` on stderr with a `warn` default (override with `RUST_LOG`).
//! If the host process already installed a logger, that one is kept.

use std::sync::Once;

static INIT: Once = Once::new();

pub(crate) fn init() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .target(env_logger::Target::Stderr)
            .try_init();
    });
}
