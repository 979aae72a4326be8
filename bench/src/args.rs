use clap::Parser;

pub const DEFAULT_URL: &str = "http://127.0.0.1:5000/users/?limit=100&offset=1";

/// Repeat a blocking GET probe and report requests per second.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Target URL, probed once per request.
    #[arg(long, env = "PROBE_URL", default_value = DEFAULT_URL)]
    pub url: String,
    /// Requests issued per loop.
    #[arg(
        short = 'n',
        long,
        env = "PROBE_REQUESTS",
        default_value_t = 1000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub requests: u64,
    /// Number of timed loops.
    #[arg(
        short,
        long,
        env = "PROBE_LOOPS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub loops: u64,
    /// Worker threads per loop. Defaults to the available parallelism.
    #[arg(
        short,
        long,
        env = "PROBE_WORKERS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub workers: Option<u64>,
}

impl Args {
    pub fn workers(&self) -> u64 {
        self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get() as u64)
                .unwrap_or(1)
        })
    }
}
