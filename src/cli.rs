use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config_loader::ChurnsightConfig;
use crate::dataset::{load_customers_csv, load_label_pairs_csv, write_scored_json};
use crate::errors::ChurnResult;
use crate::evaluate::{apply_predictions, fit_model};
use crate::insights::{factor_comparison, high_risk_count, risk_distribution, segment_breakdown};
use crate::metrics::{compute_metrics, ModelMetrics};
use crate::mock_data::{generate_mock_customers, generate_mock_customers_seeded};

/// Top-level CLI interface for churnsight
#[derive(Parser)]
#[command(
    name = "churnsight",
    version = "0.1.0",
    about = "Customer churn scoring CLI"
)]
pub struct Cli {
    /// Path to a churnsight.toml configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate mock customers, evaluate the model and print a report
    Demo {
        /// Number of customers to generate (overrides config)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Rng seed for a reproducible batch (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score customers from a CSV file
    Score {
        /// Customer CSV to score
        #[arg(short, long)]
        input: PathBuf,

        /// Write scored records as JSON to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Report metrics for (actual, predicted) label pairs in a CSV file
    Metrics {
        /// Label-pair CSV with `actual` and `predicted` columns
        #[arg(short, long)]
        input: PathBuf,
    },
}

pub fn execute(command: Commands, config: &ChurnsightConfig) -> ChurnResult<()> {
    match command {
        Commands::Demo { count, seed } => run_demo(config, count, seed),
        Commands::Score { input, output } => run_score(config, &input, output.as_deref()),
        Commands::Metrics { input } => run_metrics(&input),
    }
}

fn run_demo(config: &ChurnsightConfig, count: Option<usize>, seed: Option<u64>) -> ChurnResult<()> {
    let count = count.unwrap_or(config.data.customer_count);
    let mut customers = match seed.or(config.data.seed) {
        Some(seed) => generate_mock_customers_seeded(count, seed),
        None => generate_mock_customers(count),
    };

    let now = Utc::now();
    let report = fit_model(&config.model, &customers, now)?;
    apply_predictions(&config.model, &mut customers, now)?;

    println!("Churn model evaluation over {count} mock customers");
    print_metrics(&report.metrics);

    let distribution = risk_distribution(&customers, &config.risk_bands);
    println!(
        "\nRisk distribution: {} low / {} medium / {} high",
        distribution.low, distribution.medium, distribution.high
    );

    let factors = factor_comparison(&customers);
    if !factors.is_empty() {
        println!("\nChurn factors (churned vs active mean):");
        for factor in &factors {
            println!(
                "  {:<16} {:>8.1} vs {:>8.1}  ({:+.0}%)",
                factor.name, factor.churned, factor.active, factor.difference
            );
        }
    }

    println!("\nSegments:");
    for segment in segment_breakdown(&customers) {
        println!(
            "  {:<12} {:>4} customers, {:>5.1}% churn",
            segment.segment, segment.customers, segment.churn_rate
        );
    }

    Ok(())
}

fn run_score(
    config: &ChurnsightConfig,
    input: &std::path::Path,
    output: Option<&std::path::Path>,
) -> ChurnResult<()> {
    let mut customers = load_customers_csv(input)?;
    apply_predictions(&config.model, &mut customers, Utc::now())?;

    println!(
        "Scored {} customers, {} high risk",
        customers.len(),
        high_risk_count(&customers, &config.risk_bands)
    );

    if let Some(path) = output {
        write_scored_json(path, &customers)?;
        println!("Wrote scored records to {}", path.display());
    }

    Ok(())
}

fn run_metrics(input: &std::path::Path) -> ChurnResult<()> {
    let (actual, predicted) = load_label_pairs_csv(input)?;
    let metrics = compute_metrics(&actual, &predicted)?;

    println!("Metrics over {} label pairs", actual.len());
    print_metrics(&metrics);
    Ok(())
}

fn print_metrics(metrics: &ModelMetrics) {
    println!("  accuracy:  {:>5.1}%", metrics.accuracy * 100.0);
    println!("  precision: {:>5.1}%", metrics.precision * 100.0);
    println!("  recall:    {:>5.1}%", metrics.recall * 100.0);
    println!("  f1 score:  {:>5.1}%", metrics.f1_score * 100.0);
}
