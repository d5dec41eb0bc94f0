//! Strategy axes for the selection engine.
//!
//! A [`Variant`] pairs one [`UpdateStrategy`] with one [`Initialization`].
//! The two axes are orthogonal: every combination is a distinct algorithm
//! with its own cost profile.

use serde::{Deserialize, Serialize};

/// How the working set is updated when a new value arrives.
///
/// All strategies are O(N₀) for fixed small `n` and finish with a full sort
/// of the working set; they differ in their constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpdateStrategy {
    /// Unordered buffer plus a cached `(index, value)` of its minimum.
    ///
    /// A value larger than the cached minimum overwrites that slot, then the
    /// whole buffer is re-scanned for the new minimum.
    ///
    /// # Complexity
    /// O(n) per replacement, no heap bookkeeping
    LinearRescan,

    /// Min-heap working set; values larger than the root go through the
    /// combined replace-root-and-sift primitive.
    ///
    /// # Complexity
    /// O(log n) per replacement
    HeapReplace,

    /// Min-heap working set; every value is handed to the push-pop
    /// primitive, which performs the greater-than check itself.
    ///
    /// Output is identical to [`HeapReplace`](Self::HeapReplace). Measures
    /// the overhead of delegating the comparison.
    HeapPushPop,

    /// Min-heap working set; values larger than the root are written to
    /// slot 0 directly, followed by a bare sift-down.
    ///
    /// Skips the bookkeeping of the replace primitive (returning the old
    /// root), leaving only the sift itself.
    ManualSift,
}

impl UpdateStrategy {
    /// All update strategies, in registry order.
    pub const ALL: [UpdateStrategy; 4] = [
        UpdateStrategy::LinearRescan,
        UpdateStrategy::HeapReplace,
        UpdateStrategy::HeapPushPop,
        UpdateStrategy::ManualSift,
    ];

    /// Stem used when naming registry entries.
    pub fn stem(&self) -> &'static str {
        match self {
            UpdateStrategy::LinearRescan => "list",
            UpdateStrategy::HeapReplace => "heapreplace",
            UpdateStrategy::HeapPushPop => "heappushpop",
            UpdateStrategy::ManualSift => "manual_heapreplace",
        }
    }

    /// Whether the working set is kept under the min-heap invariant.
    pub fn uses_heap(&self) -> bool {
        !matches!(self, UpdateStrategy::LinearRescan)
    }
}

/// How the working set is filled before the main scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Initialization {
    /// Pre-fill with `n` copies of [`Value::sentinel`] and scan every input.
    ///
    /// Simple bounds from the first element on, but pays for comparisons
    /// against artificial values and can leak a sentinel into the result
    /// when no input exceeds it.
    ///
    /// [`Value::sentinel`]: super::Value::sentinel
    #[default]
    Sentinel,

    /// Seed with the first `n` elements by slicing, establish the heap (or
    /// the cached minimum) once, then scan the remaining slice.
    SliceSeed,

    /// Seed by consuming `n` elements from a single-pass iterator, then
    /// continue scanning the same iterator.
    IterSeed,
}

impl Initialization {
    /// All initialization strategies, in registry order.
    pub const ALL: [Initialization; 3] = [
        Initialization::Sentinel,
        Initialization::SliceSeed,
        Initialization::IterSeed,
    ];

    /// Suffix used when naming registry entries.
    pub fn suffix(&self) -> &'static str {
        match self {
            Initialization::Sentinel => "",
            Initialization::SliceSeed => "2",
            Initialization::IterSeed => "3",
        }
    }

    /// Whether the working set is seeded from genuine input values.
    pub fn is_direct_seed(&self) -> bool {
        !matches!(self, Initialization::Sentinel)
    }
}

/// One update strategy combined with one initialization strategy.
///
/// # Examples
///
/// ```
/// use u_nlargest::select::{Initialization, UpdateStrategy, Variant};
///
/// let variant = Variant::new(UpdateStrategy::HeapReplace)
///     .with_initialization(Initialization::IterSeed);
/// assert_eq!(variant.name(), "heapreplace3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    /// Update strategy used during the scan.
    pub update: UpdateStrategy,

    /// How the working set is seeded.
    pub initialization: Initialization,
}

impl Variant {
    /// Creates a variant with sentinel initialization.
    pub fn new(update: UpdateStrategy) -> Self {
        Self {
            update,
            initialization: Initialization::default(),
        }
    }

    pub fn with_initialization(mut self, initialization: Initialization) -> Self {
        self.initialization = initialization;
        self
    }

    /// Every update × initialization combination.
    pub fn all() -> impl Iterator<Item = Variant> {
        UpdateStrategy::ALL.into_iter().flat_map(|update| {
            Initialization::ALL
                .into_iter()
                .map(move |init| Variant::new(update).with_initialization(init))
        })
    }

    /// Short name: the update stem followed by the initialization suffix.
    pub fn name(&self) -> String {
        format!("{}{}", self.update.stem(), self.initialization.suffix())
    }
}
