//! Throughput driver for the blocking HTTP probe.
//!
//! Runs `loops` timed loops of `requests` probe calls each, spread over
//! worker threads, and summarizes requests per second across loops.

pub mod args;
pub mod report;
pub mod runner;

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

pub use args::Args;
pub use report::Summary;
pub use runner::{run_loop, split_requests, LoopReport};

const PROGRESS_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";

/// Run every loop described by `args`, showing progress on stderr.
pub fn run(args: &Args) -> anyhow::Result<Summary> {
    let workers = args.workers();
    log::info!(
        "probing {} with {} requests x {} loops on {} workers",
        args.url,
        args.requests,
        args.loops,
        workers
    );

    let pbar = ProgressBar::new(args.loops);
    pbar.set_style(ProgressStyle::with_template(PROGRESS_TEMPLATE)?.progress_chars("#>-"));
    pbar.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let mut loops = Vec::with_capacity(args.loops as usize);
    for _ in 0..args.loops {
        let report = run_loop(&args.url, args.requests, workers);
        pbar.set_message(format!("{:.2} req/s", report.requests_per_second()));
        pbar.inc(1);
        loops.push(report);
    }
    pbar.finish_and_clear();

    Ok(Summary::new(&loops, start.elapsed()))
}
