//! Reference selections used to validate and compare the engine variants.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};

use super::runner::finish;
use super::types::Value;
use crate::error::{SelectError, SelectResult};

/// A reference implementation of top-N selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Baseline {
    /// Sort the whole input, then keep the last `n` values.
    ///
    /// # Complexity
    /// O(N₀ log N₀)
    FullSort,

    /// Bounded selection through the standard library's `BinaryHeap`.
    LibraryHeap,
}

impl Baseline {
    pub const ALL: [Baseline; 2] = [Baseline::FullSort, Baseline::LibraryHeap];

    /// Short name used for registry entries.
    pub fn name(&self) -> &'static str {
        match self {
            Baseline::FullSort => "ref_sorted",
            Baseline::LibraryHeap => "ref_heap",
        }
    }

    /// Selects the `n` largest values of `input`, ascending.
    ///
    /// Follows the same conventions as [`SelectRunner::run`]: `n == 0`
    /// yields an empty result.
    ///
    /// [`SelectRunner::run`]: super::SelectRunner::run
    pub fn run<T: Value>(&self, n: usize, input: &[T]) -> SelectResult<Vec<T>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        if input.len() < n {
            return Err(SelectError::InsufficientInput {
                requested: n,
                available: input.len(),
            });
        }
        if let Some(position) = input.iter().position(|v| !v.is_comparable()) {
            return Err(SelectError::IncomparableValue { position });
        }

        match self {
            Baseline::FullSort => Ok(full_sort(n, input)),
            Baseline::LibraryHeap => Ok(library_heap(n, input)),
        }
    }
}

fn full_sort<T: Value>(n: usize, input: &[T]) -> Vec<T> {
    let sorted = finish(input.to_vec());
    sorted[sorted.len() - n..].to_vec()
}

fn library_heap<T: Value>(n: usize, input: &[T]) -> Vec<T> {
    let mut heap = BinaryHeap::with_capacity(n + 1);
    for &value in input {
        let value = Ranked(value);
        if heap.len() < n {
            heap.push(Reverse(value));
        } else if let Some(Reverse(min)) = heap.peek() {
            if value > *min {
                heap.pop();
                heap.push(Reverse(value));
            }
        }
    }
    finish(heap.into_iter().map(|Reverse(Ranked(v))| v).collect())
}

/// Total order over values already checked for comparability.
#[derive(Debug, Clone, Copy)]
struct Ranked<T>(T);

impl<T: PartialOrd> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: PartialOrd> Eq for Ranked<T> {}

impl<T: PartialOrd> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: PartialOrd> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_sort_top_n() {
        let top = Baseline::FullSort.run(3, &[3, 1, 4, 1, 5, 9, 2, 6]).unwrap();
        assert_eq!(top, vec![5, 6, 9]);
    }

    #[test]
    fn test_library_heap_top_n() {
        let top = Baseline::LibraryHeap.run(3, &[3, 1, 4, 1, 5, 9, 2, 6]).unwrap();
        assert_eq!(top, vec![5, 6, 9]);
    }

    #[test]
    fn test_baselines_agree_on_floats() {
        let input = [0.5, -2.0, 7.25, 3.0, 3.0, -0.0, 1e9];
        for n in 1..=input.len() {
            assert_eq!(
                Baseline::FullSort.run(n, &input),
                Baseline::LibraryHeap.run(n, &input),
                "n = {n}"
            );
        }
    }

    #[test]
    fn test_baseline_errors() {
        assert_eq!(
            Baseline::FullSort.run(3, &[1, 2]),
            Err(SelectError::InsufficientInput {
                requested: 3,
                available: 2
            })
        );
        assert_eq!(
            Baseline::LibraryHeap.run(1, &[1.0, f64::NAN]),
            Err(SelectError::IncomparableValue { position: 1 })
        );
        assert_eq!(Baseline::FullSort.run::<i32>(0, &[]), Ok(vec![]));
    }

    #[test]
    fn test_huge_count_is_insufficient() {
        let n = usize::MAX / 2;
        for baseline in Baseline::ALL {
            assert_eq!(
                baseline.run(n, &[1, 2, 3]),
                Err(SelectError::InsufficientInput {
                    requested: n,
                    available: 3
                }),
                "{}",
                baseline.name()
            );
        }
    }

    #[test]
    fn test_duplicates_preserved() {
        let top = Baseline::LibraryHeap.run(3, &[5, 5, 5, 5]).unwrap();
        assert_eq!(top, vec![5, 5, 5]);
    }
}
