//! Repeated-trial timing and timing reports.
//!
//! A report has the form `"100000 loops, best of 3: 2.54 usec per loop"`:
//! the loop count of one trial, the number of trials, and the best
//! per-loop time among them.

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult};

/// Outcome of timing one call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingSummary {
    /// Calls per trial.
    pub loops: u64,

    /// Number of trials.
    pub repetitions: u32,

    /// Best per-call time in seconds.
    pub time: f64,
}

/// Converts a textual number with a time unit to seconds.
///
/// Supported units: `sec`, `msec`, `usec`, `nsec`. The unit is applied as a
/// decimal exponent before parsing, so `("2.54", "usec")` is exactly `2.54e-6`.
pub fn unit_to_seconds(time: &str, unit: &str) -> BenchResult<f64> {
    let exponent = match unit {
        "sec" => "",
        "msec" => "e-3",
        "usec" => "e-6",
        "nsec" => "e-9",
        other => return Err(BenchError::UnknownTimeUnit(other.to_string())),
    };
    if time.contains(['e', 'E']) && !exponent.is_empty() {
        return Err(BenchError::MalformedReport(time.to_string()));
    }
    format!("{time}{exponent}")
        .parse()
        .map_err(|_| BenchError::MalformedReport(time.to_string()))
}

/// Parses a timing report.
///
/// # Examples
///
/// ```
/// use u_nlargest::bench::parse_timing_report;
///
/// let summary = parse_timing_report("100000 loops, best of 3: 2.54 usec per loop").unwrap();
/// assert_eq!(summary.loops, 100000);
/// assert_eq!(summary.repetitions, 3);
/// assert_eq!(summary.time, 2.54e-6);
/// ```
pub fn parse_timing_report(report: &str) -> BenchResult<TimingSummary> {
    let malformed = || BenchError::MalformedReport(report.to_string());

    let tokens: Vec<&str> = report.split_whitespace().collect();
    let [loops, loops_word, best, of, repetitions, time, unit, ..] = tokens.as_slice() else {
        return Err(malformed());
    };
    if !loops_word.starts_with("loop") || *best != "best" || *of != "of" {
        return Err(malformed());
    }

    let loops = loops.parse().map_err(|_| malformed())?;
    let repetitions = repetitions
        .trim_end_matches(':')
        .parse()
        .map_err(|_| malformed())?;
    let time = unit_to_seconds(time, unit)?;

    Ok(TimingSummary {
        loops,
        repetitions,
        time,
    })
}

impl fmt::Display for TimingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (scale, unit) = if self.time >= 1.0 {
            (1.0, "sec")
        } else if self.time >= 1e-3 {
            (1e3, "msec")
        } else if self.time >= 1e-6 {
            (1e6, "usec")
        } else {
            (1e9, "nsec")
        };
        let loops_word = if self.loops == 1 { "loop" } else { "loops" };
        write!(
            f,
            "{} {loops_word}, best of {}: {:.3} {unit} per loop",
            self.loops,
            self.repetitions,
            self.time * scale
        )
    }
}

/// Repeated-trial timer.
///
/// The loop count is chosen in the 1-2-5 sequence (1, 2, 5, 10, 20, ...)
/// until a single trial runs for at least `min_run_time`. Then
/// `repetitions` trials are run and the fastest is reported, divided by the
/// loop count. At least one trial always runs.
#[derive(Debug, Clone)]
pub struct Timer {
    repetitions: u32,
    min_run_time: Duration,
}

impl Default for Timer {
    fn default() -> Self {
        Self {
            repetitions: 3,
            min_run_time: Duration::from_millis(200),
        }
    }
}

impl Timer {
    /// `repetitions` is clamped to at least 1.
    pub fn new(repetitions: u32, min_run_time: Duration) -> Self {
        Self {
            repetitions: repetitions.max(1),
            min_run_time,
        }
    }

    /// Number of trials.
    pub fn repetitions(&self) -> u32 {
        self.repetitions
    }

    /// Minimum duration of one trial.
    pub fn min_run_time(&self) -> Duration {
        self.min_run_time
    }

    /// Finds the smallest loop count whose trial reaches `min_run_time`.
    pub fn autorange<F: FnMut()>(&self, f: &mut F) -> u64 {
        let mut magnitude = 1u64;
        loop {
            for step in [1, 2, 5] {
                let loops = magnitude.saturating_mul(step);
                if time_loops(f, loops) >= self.min_run_time || loops == u64::MAX {
                    return loops;
                }
            }
            magnitude = magnitude.saturating_mul(10);
        }
    }

    /// Times `f` and reports the best per-call time.
    ///
    /// Wrap inputs and outputs of `f` in [`std::hint::black_box`] so the
    /// measured work is not optimized away.
    pub fn measure<F: FnMut()>(&self, mut f: F) -> TimingSummary {
        let loops = self.autorange(&mut f);
        let best = (0..self.repetitions)
            .map(|_| time_loops(&mut f, loops))
            .min()
            .unwrap_or_default();

        TimingSummary {
            loops,
            repetitions: self.repetitions,
            time: best.as_secs_f64() / loops as f64,
        }
    }
}

fn time_loops<F: FnMut()>(f: &mut F, loops: u64) -> Duration {
    let start = Instant::now();
    for _ in 0..loops {
        f();
    }
    start.elapsed()
}
