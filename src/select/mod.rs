//! Top-N selection engine.
//!
//! A family of single-pass algorithms that keep a bounded working set of the
//! `n` largest values seen so far, then sort it into the ascending result.
//! The algorithms are organized along two orthogonal axes:
//!
//! - [`UpdateStrategy`]: linear re-scan for the minimum, heap replace,
//!   heap push-pop, or a manual sift-down on the heap root.
//! - [`Initialization`]: sentinel pre-fill, or seeding from the first `n`
//!   inputs (by slicing or from a single-pass iterator).
//!
//! # Key Types
//!
//! - [`Variant`]: one point on both axes
//! - [`SelectRunner`]: executes a variant
//! - [`Baseline`]: reference selections used for validation
//! - [`Registry`]: named strategies, enumerable by prefix
//!
//! # Submodules
//!
//! - [`heap`]: in-place min-heap primitives (`heapify`, `sift_down`,
//!   `replace_root`, `push_pop`)

mod baseline;
mod config;
pub mod heap;
mod registry;
mod runner;
mod types;

pub use baseline::Baseline;
pub use config::{Initialization, UpdateStrategy, Variant};
pub use registry::{select_top_n, Registry, Strategy, DEFAULT_PREFIX};
pub use runner::SelectRunner;
pub use types::Value;
