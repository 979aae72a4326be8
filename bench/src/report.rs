use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use statrs::statistics::{Data, Distribution, Median};

use crate::runner::LoopReport;

/// Aggregate over every loop of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub mean_rps: f64,
    pub median_rps: f64,
    pub total_requests: u64,
    pub total_elapsed: Duration,
    /// Calls per status code other than 200; `0` is failed calls.
    pub unexpected: BTreeMap<u16, u64>,
}

impl Summary {
    /// `total_elapsed` is wall time for the whole run, which includes the
    /// gaps between loops.
    pub fn new(loops: &[LoopReport], total_elapsed: Duration) -> Self {
        let rates: Vec<f64> = loops.iter().map(LoopReport::requests_per_second).collect();
        let (mean_rps, median_rps) = if rates.is_empty() {
            (0.0, 0.0)
        } else {
            let data = Data::new(rates);
            (data.mean().unwrap_or(0.0), data.median())
        };

        let mut unexpected = BTreeMap::new();
        for report in loops {
            for (&status, &count) in &report.statuses {
                if status != 200 {
                    *unexpected.entry(status).or_insert(0) += count;
                }
            }
        }

        Self {
            mean_rps,
            median_rps,
            total_requests: loops.iter().map(|l| l.requests).sum(),
            total_elapsed,
            unexpected,
        }
    }

    pub fn overall_rps(&self) -> f64 {
        let secs = self.total_elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.total_requests as f64 / secs
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mean: {:.2}, Median: {:.2}, Total Requests: {} in {:.2} seconds, \
             Process Mean Requests: {:.2}",
            self.mean_rps,
            self.median_rps,
            self.total_requests,
            self.total_elapsed.as_secs_f64(),
            self.overall_rps(),
        )?;
        for (status, count) in &self.unexpected {
            if *status == 0 {
                write!(f, "\n  failed: {count}")?;
            } else {
                write!(f, "\n  status {status}: {count}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loop_report(requests: u64, millis: u64, statuses: &[(u16, u64)]) -> LoopReport {
        LoopReport {
            requests,
            elapsed: Duration::from_millis(millis),
            statuses: statuses.iter().copied().collect(),
        }
    }

    #[test]
    fn mean_and_median_over_loops() {
        let loops = [
            loop_report(100, 1000, &[(200, 100)]),
            loop_report(100, 500, &[(200, 100)]),
            loop_report(100, 250, &[(200, 100)]),
        ];
        let summary = Summary::new(&loops, Duration::from_secs(2));

        assert!((summary.mean_rps - 700.0 / 3.0).abs() < 1e-9);
        assert!((summary.median_rps - 200.0).abs() < 1e-9);
        assert_eq!(summary.total_requests, 300);
        assert!((summary.overall_rps() - 150.0).abs() < 1e-9);
        assert!(summary.unexpected.is_empty());
    }

    #[test]
    fn non_200_outcomes_are_collected() {
        let loops = [
            loop_report(10, 100, &[(200, 7), (0, 2), (503, 1)]),
            loop_report(10, 100, &[(200, 9), (0, 1)]),
        ];
        let summary = Summary::new(&loops, Duration::from_millis(200));

        assert_eq!(summary.unexpected.get(&0), Some(&3));
        assert_eq!(summary.unexpected.get(&503), Some(&1));
        assert!(!summary.unexpected.contains_key(&200));

        let text = summary.to_string();
        assert!(text.contains("failed: 3"));
        assert!(text.contains("status 503: 1"));
    }

    #[test]
    fn empty_run_is_all_zero() {
        let summary = Summary::new(&[], Duration::ZERO);
        assert_eq!(summary.mean_rps, 0.0);
        assert_eq!(summary.total_requests, 0);
        assert_eq!(summary.overall_rps(), 0.0);
    }
}
