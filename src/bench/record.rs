//! Benchmark result records and their persistence.

use std::collections::BTreeMap;
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::timing::TimingSummary;
use crate::error::BenchResult;
use crate::select::{Baseline, Initialization, UpdateStrategy, Variant};

/// Timestamp layout used in output file names.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H_%M_%S";

/// Timing of one strategy at one input size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Registry name of the strategy.
    pub function: String,

    /// Number of input elements.
    pub element_count: usize,

    pub result: TimingSummary,
}

/// One strategy's `(element_count, seconds)` points, sorted by element count.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub function: String,
    pub points: Vec<(usize, f64)>,
}

/// Formats `timestamp` (default: now) for use in a file name.
pub fn filename_timestamp(timestamp: Option<DateTime<Local>>) -> String {
    timestamp
        .unwrap_or_else(Local::now)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// File name of a saved run.
pub fn output_filename(timestamp: Option<DateTime<Local>>) -> String {
    format!("benchmark_output_{}.json", filename_timestamp(timestamp))
}

/// Writes `results` as JSON into `dir` (created if missing) and returns the
/// path of the new file.
pub fn save(results: &[BenchmarkResult], dir: impl AsRef<Path>) -> BenchResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(output_filename(None));
    let writer = BufWriter::new(File::create(&path)?);
    serde_json::to_writer_pretty(writer, results)?;
    Ok(path)
}

/// Reads results written by [`save`].
pub fn load(path: impl AsRef<Path>) -> BenchResult<Vec<BenchmarkResult>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Groups results by strategy, ordered by strategy name.
pub fn series(results: &[BenchmarkResult]) -> Vec<Series> {
    let mut grouped: BTreeMap<&str, Vec<(usize, f64)>> = BTreeMap::new();
    for record in results {
        grouped
            .entry(record.function.as_str())
            .or_default()
            .push((record.element_count, record.result.time));
    }

    grouped
        .into_iter()
        .map(|(function, mut points)| {
            points.sort_by_key(|&(count, _)| count);
            Series {
                function: function.to_string(),
                points,
            }
        })
        .collect()
}

/// A named side-by-side selection of series.
///
/// Each group pairs strategies that differ only in how the working set is
/// seeded, or sets the baselines against the slice-seeded variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonGroup {
    /// Sentinel seeding against slice seeding.
    SentinelVsSlice,
    /// Sentinel seeding against iterator seeding.
    SentinelVsIter,
    /// Slice seeding against iterator seeding.
    SliceVsIter,
    /// Reference baselines against slice seeding.
    BaselinesVsSlice,
}

impl ComparisonGroup {
    pub const ALL: [ComparisonGroup; 4] = [
        ComparisonGroup::SentinelVsSlice,
        ComparisonGroup::SentinelVsIter,
        ComparisonGroup::SliceVsIter,
        ComparisonGroup::BaselinesVsSlice,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ComparisonGroup::SentinelVsSlice => "init-1-vs-2",
            ComparisonGroup::SentinelVsIter => "init-1-vs-3",
            ComparisonGroup::SliceVsIter => "init-2-vs-3",
            ComparisonGroup::BaselinesVsSlice => "ref-vs-init-2",
        }
    }

    /// Registry names in the group, in display order.
    pub fn functions(&self, prefix: &str) -> Vec<String> {
        let pair = |a: Initialization, b: Initialization| -> Vec<Variant> {
            UpdateStrategy::ALL
                .into_iter()
                .flat_map(|update| {
                    let variant = Variant::new(update);
                    [variant.with_initialization(a), variant.with_initialization(b)]
                })
                .collect()
        };

        let mut names = Vec::new();
        let variants = match self {
            ComparisonGroup::SentinelVsSlice => {
                pair(Initialization::Sentinel, Initialization::SliceSeed)
            }
            ComparisonGroup::SentinelVsIter => {
                pair(Initialization::Sentinel, Initialization::IterSeed)
            }
            ComparisonGroup::SliceVsIter => {
                pair(Initialization::SliceSeed, Initialization::IterSeed)
            }
            ComparisonGroup::BaselinesVsSlice => {
                names.extend(
                    Baseline::ALL
                        .iter()
                        .map(|baseline| format!("{prefix}{}", baseline.name())),
                );
                UpdateStrategy::ALL
                    .into_iter()
                    .map(|update| {
                        Variant::new(update).with_initialization(Initialization::SliceSeed)
                    })
                    .collect()
            }
        };

        names.extend(
            variants
                .iter()
                .map(|variant| format!("{prefix}{}", variant.name())),
        );
        names
    }

    /// Picks the group's series out of `series`, in group order. Members
    /// missing from the run are skipped.
    pub fn select(&self, prefix: &str, series: &[Series]) -> Vec<Series> {
        self.functions(prefix)
            .iter()
            .filter_map(|name| series.iter().find(|s| &s.function == name))
            .cloned()
            .collect()
    }
}

impl fmt::Display for ComparisonGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ComparisonGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComparisonGroup::ALL
            .into_iter()
            .find(|group| group.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = ComparisonGroup::ALL.iter().map(|g| g.name()).collect();
                format!(
                    "unknown comparison group {s:?}, expected one of {}",
                    names.join(", ")
                )
            })
    }
}
