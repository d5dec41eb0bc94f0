//! Command-line harness: run benchmarks, save them, report saved runs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use u_nlargest::bench::{record, BenchConfig, BenchRunner, ComparisonGroup};
use u_nlargest::select::{Registry, DEFAULT_PREFIX};

#[derive(Debug, Parser)]
#[command(name = "nlargest-bench", version, about = "Benchmark top-N selection strategies")]
struct Cli {
    /// Enable debug output (RUST_LOG takes precedence when set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Time every matching strategy over the configured input sizes
    Run {
        /// Configuration file
        config: PathBuf,

        /// Save results to permanent storage
        #[arg(long)]
        save: bool,

        /// Directory for saved results
        #[arg(long, value_name = "DIR", default_value = "output")]
        output_dir: PathBuf,
    },

    /// Print the per-strategy series of a saved run
    Report {
        /// Benchmark data file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Only print one comparison (init-1-vs-2, init-1-vs-3, init-2-vs-3,
        /// ref-vs-init-2)
        #[arg(long, value_name = "NAME")]
        group: Option<ComparisonGroup>,
    },

    /// List registered strategies
    List {
        #[arg(long, default_value = DEFAULT_PREFIX)]
        prefix: String,
    },
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn run(config: PathBuf, save: bool, output_dir: PathBuf) -> Result<()> {
    let config = BenchConfig::from_file(&config)
        .with_context(|| format!("reading configuration {}", config.display()))?;
    if save {
        info!("results will be saved to {}", output_dir.display());
    } else {
        info!("run with --save to keep the results");
    }

    let registry = Registry::standard();
    let results = BenchRunner::run(&registry, &config)?;

    if save {
        let path = record::save(&results, &output_dir)?;
        info!("wrote benchmark results to {}", path.display());
    }
    Ok(())
}

fn report(file: PathBuf, group: Option<ComparisonGroup>) -> Result<()> {
    let results =
        record::load(&file).with_context(|| format!("loading results {}", file.display()))?;
    let mut all_series = record::series(&results);
    if let Some(group) = group {
        all_series = group.select(DEFAULT_PREFIX, &all_series);
        if all_series.is_empty() {
            warn!("{} holds no series for group {group}", file.display());
        }
    }

    for series in all_series {
        println!("{}", series.function);
        for (element_count, time) in series.points {
            println!("  {element_count:>12}  {time:.6e} s");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Command::Run {
            config,
            save,
            output_dir,
        } => run(config, save, output_dir),
        Command::Report { file, group } => report(file, group),
        Command::List { prefix } => {
            let registry = Registry::standard();
            for name in registry.names_with_prefix(&prefix) {
                println!("{name}");
            }
            Ok(())
        }
    }
}
