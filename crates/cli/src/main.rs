//! # dst-eval
//!
//! Replays the Dst evaluation period through the reference predictor,
//! writes the submission and optionally logs the RMSE.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use harness::{run_evaluation, RunConfig, RunConfigBuilder};
use predictor_core::PredictorContext;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "dst-eval")]
#[command(about = "Evaluate a Dst forecaster against historical labels", long_about = None)]
struct Cli {
    /// Directory with dst_labels.csv, solar_wind.csv, satellite_positions.csv and sunspots.csv
    #[arg(short, long, env = "DST_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Submission CSV to write
    #[arg(short, long, env = "DST_OUTPUT", conflicts_with = "no_output")]
    output: Option<PathBuf>,

    /// Skip writing the submission
    #[arg(long)]
    no_output: bool,

    /// Compute and log the RMSE against the labels
    #[arg(long, env = "DST_PRINT_SCORE")]
    print_score: bool,

    /// Wall-clock ceiling per prediction, in seconds
    #[arg(long, env = "DST_TIME_BUDGET_SECS")]
    time_budget_secs: Option<f64>,

    /// Run configuration (JSON); flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reference predictor configuration (JSON)
    #[arg(short, long, env = "DST_MODEL_CONFIG")]
    model_config: PathBuf,
}

impl Cli {
    /// Merge the optional config file with the flags.
    fn run_config(&self) -> anyhow::Result<RunConfig> {
        let base = match &self.config {
            Some(path) => RunConfig::from_json_file(path)
                .with_context(|| format!("failed to load run configuration {}", path.display()))?,
            None => RunConfig::default(),
        };

        let mut builder = RunConfigBuilder::from_config(base);
        if let Some(dir) = &self.data_dir {
            builder = builder.data_dir(dir);
        }
        if let Some(output) = &self.output {
            builder = builder.output(output);
        }
        if self.no_output {
            builder = builder.no_output();
        }
        if self.print_score {
            builder = builder.print_score(true);
        }
        if let Some(secs) = self.time_budget_secs {
            builder = builder.time_budget_secs(secs);
        }
        Ok(builder.build()?)
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.run_config()?;
    let predictor = PredictorContext::load(&cli.model_config).with_context(|| {
        format!("failed to load predictor from {}", cli.model_config.display())
    })?;

    let outcome = run_evaluation(&config, &predictor)?;
    info!(
        "evaluated {} points in {:.2?} (slowest call {:.2?})",
        outcome.summary.points, outcome.summary.total_predict_time, outcome.summary.slowest_call
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    run(&cli)
}
