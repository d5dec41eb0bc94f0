//! Measurement harness.
//!
//! Drives the selection engine with seeded synthetic inputs of increasing
//! size, times each strategy with repeated trials and records
//! `(strategy, element_count) → timing` results. The harness depends on the
//! engine's [`Registry`](crate::select::Registry); the engine knows nothing
//! about the harness.
//!
//! # Key Types
//!
//! - [`BenchConfig`]: run parameters, loaded from TOML
//! - [`BenchRunner`]: executes a run
//! - [`Timer`] / [`TimingSummary`]: repeated-trial timing and its report
//! - [`BenchmarkResult`]: one persisted record
//! - [`ComparisonGroup`]: named side-by-side selections of saved series

mod config;
pub mod input;
pub mod record;
mod runner;
mod timing;

pub use config::BenchConfig;
pub use record::{BenchmarkResult, ComparisonGroup, Series};
pub use runner::BenchRunner;
pub use timing::{parse_timing_report, unit_to_seconds, Timer, TimingSummary};
