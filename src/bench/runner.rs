//! Benchmark execution loop.

use std::hint::black_box;
use std::time::Duration;

use tracing::{debug, info};

use super::config::BenchConfig;
use super::input::{create_rng, random_sequence};
use super::record::BenchmarkResult;
use super::timing::Timer;
use crate::error::{BenchError, BenchResult};
use crate::select::{select_top_n, Baseline, Registry};

/// Times every registered strategy over inputs of increasing size.
pub struct BenchRunner;

impl BenchRunner {
    /// Runs the benchmark described by `config`.
    ///
    /// One input of the largest element count is drawn from a generator
    /// seeded with `config.seed`; smaller runs use its prefix. Strategies
    /// are taken from `registry` by `config.prefix` and measured in name
    /// order, each across all element counts.
    ///
    /// Every strategy is checked against [`Baseline::FullSort`] before it
    /// is timed. A disagreement aborts the run with [`BenchError::Mismatch`];
    /// a strategy that returns a wrong answer is never timed or recorded.
    pub fn run(registry: &Registry, config: &BenchConfig) -> BenchResult<Vec<BenchmarkResult>> {
        config.validate().map_err(BenchError::InvalidConfig)?;

        let element_counts = config.element_counts();
        let max_element_count = element_counts.iter().copied().max().unwrap_or(0);

        let names = registry.names_with_prefix(&config.prefix);
        if names.is_empty() {
            return Err(BenchError::NoStrategies(config.prefix.clone()));
        }

        info!(
            strategies = names.len(),
            element_counts = ?element_counts,
            count = config.count,
            seed = config.seed,
            "starting benchmark run"
        );

        let mut rng = create_rng(config.seed);
        let input = random_sequence(&mut rng, max_element_count, config.max_value);
        let timer = Timer::new(
            config.repetitions,
            Duration::from_millis(config.min_run_time_ms),
        );

        let mut results = Vec::with_capacity(names.len() * element_counts.len());
        for name in names {
            let strategy = registry.resolve(name)?;
            for &element_count in &element_counts {
                let data = &input[..element_count];

                let expected = Baseline::FullSort.run(config.count, data)?;
                let actual = select_top_n(strategy, config.count, data)?;
                verify(name, element_count, &actual, &expected)?;

                debug!(function = name, element_count, "timing");
                let timing = timer.measure(|| {
                    let _ = black_box(strategy.run(black_box(config.count), black_box(data)));
                });

                info!(function = name, element_count, "{timing}");
                results.push(BenchmarkResult {
                    function: name.to_string(),
                    element_count,
                    result: timing,
                });
            }
        }

        Ok(results)
    }
}

fn verify(
    function: &str,
    element_count: usize,
    actual: &[i64],
    expected: &[i64],
) -> BenchResult<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(BenchError::Mismatch {
            function: function.to_string(),
            element_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::{UpdateStrategy, Variant};

    fn quick_config() -> BenchConfig {
        BenchConfig::default()
            .with_powers(vec![1.0, 2.0])
            .with_count(5)
            .with_repetitions(1)
            .with_min_run_time_ms(0)
    }

    #[test]
    fn test_run_all_standard_strategies() {
        let registry = Registry::standard();
        let results = BenchRunner::run(&registry, &quick_config()).unwrap();

        assert_eq!(results.len(), registry.len() * 2);
        // Variant-major order: each strategy across all sizes.
        assert_eq!(results[0].function, results[1].function);
        assert_eq!(results[0].element_count, 10);
        assert_eq!(results[1].element_count, 100);
        assert!(results.iter().all(|r| r.result.repetitions == 1));
        assert!(results.iter().all(|r| r.result.loops >= 1));
    }

    #[test]
    fn test_run_filters_by_prefix() {
        let registry = Registry::standard();
        let config = quick_config().with_prefix("nlargest_ref_");
        let results = BenchRunner::run(&registry, &config).unwrap();

        let functions: Vec<&str> = results.iter().map(|r| r.function.as_str()).collect();
        assert_eq!(
            functions,
            vec![
                "nlargest_ref_heap",
                "nlargest_ref_heap",
                "nlargest_ref_sorted",
                "nlargest_ref_sorted"
            ]
        );
    }

    #[test]
    fn test_run_custom_registry() {
        let registry = Registry::new()
            .with_strategy("mine_heap", Variant::new(UpdateStrategy::HeapReplace))
            .unwrap();
        let config = quick_config().with_prefix("mine_");
        let results = BenchRunner::run(&registry, &config).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_run_no_matching_strategies() {
        let registry = Registry::standard();
        let config = quick_config().with_prefix("missing_");
        let err = BenchRunner::run(&registry, &config).unwrap_err();
        assert!(matches!(err, BenchError::NoStrategies(p) if p == "missing_"));
    }

    #[test]
    fn test_verify_rejects_wrong_answer() {
        assert!(verify("nlargest_list", 10, &[5, 6, 9], &[5, 6, 9]).is_ok());

        let err = verify("nlargest_list", 10, &[0, 6, 9], &[5, 6, 9]).unwrap_err();
        assert!(matches!(
            err,
            BenchError::Mismatch { ref function, element_count: 10 } if function == "nlargest_list"
        ));
        assert_eq!(
            err.to_string(),
            "nlargest_list disagrees with the full-sort baseline at 10 elements"
        );
    }

    #[test]
    fn test_run_invalid_config() {
        let registry = Registry::standard();
        let config = quick_config().with_repetitions(0);
        let err = BenchRunner::run(&registry, &config).unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig(_)));
    }
}
