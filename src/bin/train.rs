use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use carpricer::linear_model::{TrainConfig, train};
use carpricer::{Dataset, metrics, params};

#[derive(Debug, Parser)]
#[command(
    name = "train",
    about = "Fit a mileage-to-price linear model with gradient descent",
    version
)]
struct Cli {
    /// Path to the training dataset (CSV with a header row)
    #[arg(long, value_name = "PATH", default_value = "data.csv")]
    data: PathBuf,

    /// Where to write the fitted parameters
    #[arg(long, value_name = "PATH", default_value = "params.csv")]
    params: PathBuf,

    #[arg(long, default_value_t = 0.1)]
    learning_rate: f64,

    #[arg(long, default_value_t = 1000)]
    max_iterations: usize,

    #[arg(long, default_value_t = 1e-7)]
    convergence_threshold: f64,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let dataset = Dataset::from_csv(&cli.data)
        .with_context(|| format!("could not load dataset from {}", cli.data.display()))?;
    tracing::info!(samples = dataset.len(), path = %cli.data.display(), "dataset loaded");

    let config = TrainConfig {
        learning_rate: cli.learning_rate,
        max_iterations: cli.max_iterations,
        convergence_threshold: cli.convergence_threshold,
    };
    let model = train(&dataset, &config)?;
    tracing::info!(theta0 = model.theta0, theta1 = model.theta1, "model fitted");

    params::save(&model, &cli.params)
        .with_context(|| format!("could not write parameters to {}", cli.params.display()))?;

    let eval = metrics::evaluate(&model, &dataset)?;
    println!("Precision Metrics:");
    println!("Mean Absolute Error (MAE): {:.2}", eval.mae);
    println!("Mean Squared Error (MSE): {:.2}", eval.mse);
    println!("R-squared: {:.2}", eval.r_squared);

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CARPRICER_LOG")
        .unwrap_or_else(|_| EnvFilter::new("carpricer=info,train=info"));
    tracing_subscriber::fmt().with_env_filter(filter).without_time().init();
}
