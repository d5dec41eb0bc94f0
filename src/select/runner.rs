//! Selection execution loops.
//!
//! # Algorithm
//!
//! 1. Seed the working set (`n` sentinels, or the first `n` inputs)
//! 2. For heap strategies over a direct seed, heapify the seed once
//! 3. Scan the remaining inputs, updating the working set per strategy
//! 4. Sort the working set ascending and return it
//!
//! The scan loop is monomorphic per update strategy: the strategy is matched
//! once, outside the loop.

use std::cmp::Ordering;

use super::config::{Initialization, UpdateStrategy, Variant};
use super::heap;
use super::types::Value;
use crate::error::{SelectError, SelectResult};

/// Executes a selection [`Variant`].
///
/// These are the raw engine entry points: `n == 0` yields an empty result
/// without touching the input. Use [`select_top_n`](super::select_top_n) for
/// the validated operation that rejects `n == 0`.
pub struct SelectRunner;

impl SelectRunner {
    /// Selects the `n` largest values of `input`, ascending.
    ///
    /// # Errors
    ///
    /// - [`SelectError::InsufficientInput`] when `input` holds fewer than `n`
    ///   values.
    /// - [`SelectError::IncomparableValue`] when a value has no total order.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_nlargest::select::{SelectRunner, UpdateStrategy, Variant};
    ///
    /// let variant = Variant::new(UpdateStrategy::HeapReplace);
    /// let top = SelectRunner::run(&variant, 3, &[3, 1, 4, 1, 5, 9, 2, 6]).unwrap();
    /// assert_eq!(top, vec![5, 6, 9]);
    /// ```
    pub fn run<T: Value>(variant: &Variant, n: usize, input: &[T]) -> SelectResult<Vec<T>> {
        if n == 0 {
            return Ok(Vec::new());
        }
        // The working set holds `n` values; never size it past the input.
        if input.len() < n {
            return Err(SelectError::InsufficientInput {
                requested: n,
                available: input.len(),
            });
        }

        match variant.initialization {
            Initialization::Sentinel => sentinel_seeded(variant.update, n, input.iter().copied()),
            Initialization::SliceSeed => slice_seeded(variant.update, n, input),
            Initialization::IterSeed => iter_seeded(variant.update, n, input.iter().copied()),
        }
    }

    /// Selects the `n` largest values from a single-pass iterator, ascending.
    ///
    /// [`Initialization::SliceSeed`] needs random access, so for that variant
    /// the iterator is first collected into a buffer.
    ///
    /// An iterator whose `size_hint` upper bound is below `n` fails with
    /// [`SelectError::InsufficientInput`] before anything is allocated.
    pub fn run_iter<T, I>(variant: &Variant, n: usize, input: I) -> SelectResult<Vec<T>>
    where
        T: Value,
        I: IntoIterator<Item = T>,
    {
        if n == 0 {
            return Ok(Vec::new());
        }

        let input = input.into_iter();
        if input.size_hint().1.is_some_and(|upper| upper < n) {
            return Err(SelectError::InsufficientInput {
                requested: n,
                available: input.count(),
            });
        }

        match variant.initialization {
            Initialization::Sentinel => sentinel_seeded(variant.update, n, input),
            Initialization::SliceSeed => {
                let buffer: Vec<T> = input.collect();
                slice_seeded(variant.update, n, &buffer)
            }
            Initialization::IterSeed => iter_seeded(variant.update, n, input),
        }
    }
}

/// Fills the working set with sentinels and scans every input.
fn sentinel_seeded<T, I>(update: UpdateStrategy, n: usize, input: I) -> SelectResult<Vec<T>>
where
    T: Value,
    I: IntoIterator<Item = T>,
{
    // A uniform buffer already satisfies the heap order.
    let mut working = vec![T::sentinel(); n];

    let scanned = scan(update, &mut working, input.into_iter(), 0)?;
    if scanned < n {
        return Err(SelectError::InsufficientInput {
            requested: n,
            available: scanned,
        });
    }

    Ok(finish(working))
}

/// Seeds the working set by slicing off the first `n` inputs.
fn slice_seeded<T: Value>(update: UpdateStrategy, n: usize, input: &[T]) -> SelectResult<Vec<T>> {
    if input.len() < n {
        return Err(SelectError::InsufficientInput {
            requested: n,
            available: input.len(),
        });
    }

    let (seed, rest) = input.split_at(n);
    if let Some(position) = seed.iter().position(|v| !v.is_comparable()) {
        return Err(SelectError::IncomparableValue { position });
    }

    let mut working = seed.to_vec();
    if update.uses_heap() {
        heap::heapify(&mut working);
    }

    scan(update, &mut working, rest.iter().copied(), n)?;
    Ok(finish(working))
}

/// Seeds the working set by consuming `n` values from the iterator, then
/// keeps scanning the same iterator.
fn iter_seeded<T, I>(update: UpdateStrategy, n: usize, input: I) -> SelectResult<Vec<T>>
where
    T: Value,
    I: IntoIterator<Item = T>,
{
    let mut values = input.into_iter();

    let mut working = Vec::with_capacity(n.min(values.size_hint().0));
    for position in 0..n {
        match values.next() {
            Some(value) => working.push(comparable(value, position)?),
            None => {
                return Err(SelectError::InsufficientInput {
                    requested: n,
                    available: position,
                })
            }
        }
    }

    if update.uses_heap() {
        heap::heapify(&mut working);
    }

    scan(update, &mut working, values, n)?;
    Ok(finish(working))
}

/// Runs the update loop over `values`. `offset` is the input position of the
/// first value, used for error reporting. Returns the number of values scanned.
fn scan<T, I>(
    update: UpdateStrategy,
    working: &mut [T],
    values: I,
    offset: usize,
) -> SelectResult<usize>
where
    T: Value,
    I: Iterator<Item = T>,
{
    let mut scanned = 0usize;

    match update {
        UpdateStrategy::LinearRescan => {
            let (mut min_index, mut min_value) = min_index_value(working);
            for value in values {
                let value = comparable(value, offset + scanned)?;
                if value > min_value {
                    working[min_index] = value;
                    (min_index, min_value) = min_index_value(working);
                }
                scanned += 1;
            }
        }

        UpdateStrategy::HeapReplace => {
            for value in values {
                let value = comparable(value, offset + scanned)?;
                if value > working[0] {
                    heap::replace_root(working, value);
                }
                scanned += 1;
            }
        }

        UpdateStrategy::HeapPushPop => {
            for value in values {
                let value = comparable(value, offset + scanned)?;
                heap::push_pop(working, value);
                scanned += 1;
            }
        }

        UpdateStrategy::ManualSift => {
            for value in values {
                let value = comparable(value, offset + scanned)?;
                if value > working[0] {
                    working[0] = value;
                    heap::sift_down(working, 0);
                }
                scanned += 1;
            }
        }
    }

    Ok(scanned)
}

/// Index and value of the first minimum. `working` is never empty here.
fn min_index_value<T: Value>(working: &[T]) -> (usize, T) {
    let mut min_index = 0;
    let mut min_value = working[0];
    for (i, &value) in working.iter().enumerate().skip(1) {
        if value < min_value {
            min_index = i;
            min_value = value;
        }
    }
    (min_index, min_value)
}

#[inline]
fn comparable<T: Value>(value: T, position: usize) -> SelectResult<T> {
    if value.is_comparable() {
        Ok(value)
    } else {
        Err(SelectError::IncomparableValue { position })
    }
}

/// Sorts the working set ascending.
pub(crate) fn finish<T: Value>(mut working: Vec<T>) -> Vec<T> {
    working.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    working
}
