//! Named strategy registry.
//!
//! Every strategy is registered under a name sharing a common prefix, so a
//! harness can enumerate all variants without a hardcoded list. The registry
//! is populated explicitly at startup; nothing is discovered at runtime.

use super::baseline::Baseline;
use super::config::Variant;
use super::runner::SelectRunner;
use super::types::Value;
use crate::error::{SelectError, SelectResult};

/// Prefix shared by every entry of [`Registry::standard`].
pub const DEFAULT_PREFIX: &str = "nlargest_";

/// Anything that can answer a top-N query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// An engine variant (update × initialization).
    Engine(Variant),

    /// A reference baseline.
    Baseline(Baseline),
}

impl Strategy {
    /// Runs the strategy with the raw engine conventions (`n == 0` is empty).
    pub fn run<T: Value>(&self, n: usize, input: &[T]) -> SelectResult<Vec<T>> {
        match self {
            Strategy::Engine(variant) => SelectRunner::run(variant, n, input),
            Strategy::Baseline(baseline) => baseline.run(n, input),
        }
    }

    /// Short name without prefix.
    pub fn name(&self) -> String {
        match self {
            Strategy::Engine(variant) => variant.name(),
            Strategy::Baseline(baseline) => baseline.name().to_string(),
        }
    }
}

impl From<Variant> for Strategy {
    fn from(variant: Variant) -> Self {
        Strategy::Engine(variant)
    }
}

impl From<Baseline> for Strategy {
    fn from(baseline: Baseline) -> Self {
        Strategy::Baseline(baseline)
    }
}

/// Selects the `n` largest values of `input` in ascending order.
///
/// This is the validated operation: `n` must be at least 1 and `input` must
/// hold at least `n` values.
///
/// # Errors
///
/// - [`SelectError::InvalidCount`] when `n == 0`.
/// - [`SelectError::InsufficientInput`] when `input.len() < n`.
/// - [`SelectError::IncomparableValue`] for values outside the total order.
///
/// # Examples
///
/// ```
/// use u_nlargest::select::{select_top_n, Strategy, UpdateStrategy, Variant};
///
/// let strategy = Strategy::from(Variant::new(UpdateStrategy::LinearRescan));
/// assert_eq!(select_top_n(&strategy, 1, &[3, 1, 4, 1, 5, 9, 2, 6]).unwrap(), vec![9]);
/// ```
pub fn select_top_n<T: Value>(strategy: &Strategy, n: usize, input: &[T]) -> SelectResult<Vec<T>> {
    if n == 0 {
        return Err(SelectError::InvalidCount);
    }
    strategy.run(n, input)
}

/// Ordered collection of named strategies.
///
/// Names are kept in registration order; lookups are linear, which is fine
/// for the handful of entries a benchmark compares.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<(String, Strategy)>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the baselines followed by every engine
    /// variant, all named with [`DEFAULT_PREFIX`].
    ///
    /// Name suffixes encode the initialization: none for sentinel, `2` for
    /// slice seeding, `3` for iterator seeding.
    pub fn standard() -> Self {
        let mut entries: Vec<(String, Strategy)> = Vec::new();
        for baseline in Baseline::ALL {
            let name = format!("{DEFAULT_PREFIX}{}", baseline.name());
            entries.push((name, baseline.into()));
        }
        for variant in Variant::all() {
            let name = format!("{DEFAULT_PREFIX}{}", variant.name());
            entries.push((name, variant.into()));
        }
        Self { entries }
    }

    /// Registers `strategy` under `name`.
    ///
    /// # Errors
    ///
    /// [`SelectError::DuplicateStrategy`] when `name` is taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        strategy: impl Into<Strategy>,
    ) -> SelectResult<()> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(SelectError::DuplicateStrategy(name));
        }
        self.entries.push((name, strategy.into()));
        Ok(())
    }

    pub fn with_strategy(
        mut self,
        name: impl Into<String>,
        strategy: impl Into<Strategy>,
    ) -> SelectResult<Self> {
        self.register(name, strategy)?;
        Ok(self)
    }

    /// Returns the strategy registered under `name`.
    pub fn get(&self, name: &str) -> Option<&Strategy> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, strategy)| strategy)
    }

    /// Like [`get`](Self::get), but an unknown name is an error.
    pub fn resolve(&self, name: &str) -> SelectResult<&Strategy> {
        self.get(name)
            .ok_or_else(|| SelectError::UnknownStrategy(name.to_string()))
    }

    /// Names starting with `prefix`, sorted alphabetically.
    pub fn names_with_prefix(&self, prefix: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .iter()
            .map(|(name, _)| name.as_str())
            .filter(|name| name.starts_with(prefix))
            .collect();
        names.sort_unstable();
        names
    }

    /// All entries, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Strategy)> {
        self.entries.iter().map(|(name, strategy)| (name.as_str(), strategy))
    }

    /// Number of registered strategies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
