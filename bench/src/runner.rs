//! Timed loops of probe calls spread over worker threads.
//!
//! Each worker calls `probe_core::fetch_status` on its own; the only thing
//! shared is the target URL. Outcomes are tallied per worker and merged when
//! the loop ends.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of one timed loop.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoopReport {
    pub requests: u64,
    pub elapsed: Duration,
    /// Count of calls per returned status; `0` counts failed calls.
    pub statuses: BTreeMap<u16, u64>,
}

impl LoopReport {
    pub fn requests_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.requests as f64 / secs
    }
}

/// How many of `requests` each of `workers` threads issues. Never returns
/// more shares than requests, and no share is empty.
pub fn split_requests(requests: u64, workers: u64) -> Vec<u64> {
    let workers = workers.clamp(1, requests.max(1));
    let base = requests / workers;
    let extra = requests % workers;
    (0..workers)
        .map(|i| base + u64::from(i < extra))
        .filter(|share| *share > 0)
        .collect()
}

/// Run one loop of `requests` probes against `url` with `workers` threads.
pub fn run_loop(url: &str, requests: u64, workers: u64) -> LoopReport {
    run_loop_with(url, requests, workers, probe_core::fetch_status)
}

pub(crate) fn run_loop_with<F>(url: &str, requests: u64, workers: u64, probe: F) -> LoopReport
where
    F: Fn(&str) -> u16 + Sync,
{
    let shares = split_requests(requests, workers);
    let probe = &probe;
    let start = Instant::now();
    let tallies: Vec<BTreeMap<u16, u64>> = std::thread::scope(|s| {
        let handles: Vec<_> = shares
            .iter()
            .map(|&share| {
                let handle = s.spawn(move || {
                    let mut tally = BTreeMap::new();
                    for _ in 0..share {
                        *tally.entry(probe(url)).or_insert(0) += 1;
                    }
                    tally
                });
                (share, handle)
            })
            .collect();
        handles
            .into_iter()
            .map(|(share, handle)| {
                // A worker that panicked has no tally; its whole share failed.
                handle.join().unwrap_or_else(|_| {
                    log::error!("worker panicked; counting {share} requests as failed");
                    BTreeMap::from([(probe_core::SENTINEL_STATUS, share)])
                })
            })
            .collect()
    });
    let elapsed = start.elapsed();

    let mut statuses = BTreeMap::new();
    for tally in tallies {
        for (status, count) in tally {
            *statuses.entry(status).or_insert(0) += count;
        }
    }
    log::debug!("loop of {requests} requests finished in {elapsed:?}");

    LoopReport {
        requests,
        elapsed,
        statuses,
    }
}
