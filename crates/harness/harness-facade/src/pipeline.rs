//! End-to-end evaluation run.

use harness_api::RunConfig;
use harness_core::{
    build_ground_truth, build_submission_frame, check_aligned, ensure_inputs_exist, load_series,
    score, write_submission, FeatureStore, PredictionRunner, RunSummary, SeriesSchema,
    WindowExtractor,
};
use harness_spi::{GroundTruthTable, Predictor, Result, SubmissionFrame, SubmissionTable};
use tracing::info;

/// Everything a run produced, returned for chaining and tests.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub frame: SubmissionFrame,
    pub ground_truth: GroundTruthTable,
    pub submission: SubmissionTable,
    /// RMSE, present when `print_score` is set
    pub score: Option<f64>,
    pub summary: RunSummary,
}

/// Run the whole evaluation described by `config` against `predictor`.
///
/// All four inputs must exist before anything is read. Any failure aborts
/// the run; nothing is retried.
pub fn run_evaluation<P>(config: &RunConfig, predictor: &P) -> Result<RunOutcome>
where
    P: Predictor + ?Sized,
{
    config.validate()?;
    let paths = config.input_paths();
    ensure_inputs_exist(&paths)?;

    let labels = load_series(&paths.labels, SeriesSchema::LABELS)?;

    info!("calculating submission format and ground truth ...");
    let frame = build_submission_frame(&labels);
    let ground_truth = build_ground_truth(&labels, &frame)?;
    check_aligned(&frame, &ground_truth)?;
    drop(labels);
    info!(
        "calculated submission format and ground truth with {} rows",
        frame.len()
    );

    let store = FeatureStore::load(&paths)?;
    let extractor = WindowExtractor::new(&store)?;
    let runner = PredictionRunner::from_config(config);
    let (submission, summary) = runner.run(&frame, &extractor, predictor)?;

    if let Some(output) = &config.output {
        write_submission(output, &submission)?;
    }

    let rmse = if config.print_score {
        let value = score(&submission, &ground_truth)?;
        info!("{}", "-".repeat(80));
        info!("RMSE: {:.2}", value);
        info!("{}", "-".repeat(80));
        Some(value)
    } else {
        None
    };

    Ok(RunOutcome {
        frame,
        ground_truth,
        submission,
        score: rmse,
        summary,
    })
}
