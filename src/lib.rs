//! Top-N selection strategies and a harness to compare them.
//!
//! Selecting the `n` largest values of a sequence without sorting all of it
//! can be done many ways. This crate implements a family of single-pass
//! strategies that differ only in constants, so they can be measured
//! against each other:
//!
//! - **Selection engine** ([`select`]): linear re-scan, heap replace,
//!   heap push-pop and manual heap sift update strategies, each with
//!   sentinel or direct-seed initialization, plus reference baselines.
//! - **Measurement harness** ([`bench`]): seeded input generation,
//!   repeated-trial timing, result persistence and per-strategy series.
//!
//! # Architecture
//!
//! Data flows one way: the harness generates input, the engine selects,
//! the harness records the elapsed time. The engine never depends on the
//! harness.

pub mod bench;
pub mod error;
pub mod select;

pub use error::{BenchError, BenchResult, SelectError, SelectResult};
