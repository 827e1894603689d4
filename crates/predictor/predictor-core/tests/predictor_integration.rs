//! Integration tests for the reference predictor
//!
//! Loads a model configuration from disk and runs it on synthetic solar
//! wind windows through the harness `Predictor` contract.

use std::io::Write;

use harness_spi::{FeatureWindow, Period, Predictor, SeriesWindow, Timedelta};
use predictor_core::{PredictorContext, PredictorError, DEFAULT_SOLAR_WIND_FEATURES};
use tempfile::NamedTempFile;

const TIMESTEPS: usize = 4;

fn write_config(bias: [f64; 2]) -> NamedTempFile {
    let width = 2 * DEFAULT_SOLAR_WIND_FEATURES.len() + 1;
    let cells = TIMESTEPS * width;
    let mut w0 = vec![0.0; cells];
    // newest bz_gse mean
    w0[(TIMESTEPS - 1) * width + 4] = -2.0;
    let config = serde_json::json!({
        "timesteps": TIMESTEPS,
        "scaler": { "mean": vec![0.0; width], "scale": vec![1.0; width] },
        "model": { "bias": bias, "weights": [w0, vec![0.0; cells]] }
    });
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config.to_string().as_bytes()).unwrap();
    file
}

struct SolarWind {
    columns: Vec<String>,
    timestamps: Vec<Timedelta>,
    rows: Vec<Vec<f64>>,
}

/// Minute samples for `minutes`; `bz_gse` is `bz(minute)`, the rest constant.
fn solar_wind(minutes: impl Iterator<Item = i64>, bz: impl Fn(i64) -> f64) -> SolarWind {
    let mut columns: Vec<String> = DEFAULT_SOLAR_WIND_FEATURES.iter().map(|s| s.to_string()).collect();
    columns.push("extra".to_string());
    let mut timestamps = Vec::new();
    let mut rows = Vec::new();
    for m in minutes {
        timestamps.push(Timedelta::from_minutes(m));
        // bt, temperature, bx, by, bz, speed, density, extra
        rows.push(vec![5.0, 1e5, 1.0, -1.0, bz(m), 400.0, 3.0, 0.0]);
    }
    SolarWind {
        columns,
        timestamps,
        rows,
    }
}

fn predict(ctx: &PredictorContext, data: &SolarWind) -> Result<(f64, f64), String> {
    let period = Period::from("p1");
    let none: Vec<String> = Vec::new();
    let window = FeatureWindow {
        period: &period,
        t0: Timedelta::from_days(7),
        solar_wind: SeriesWindow::new(&data.columns, &data.timestamps, &data.rows),
        satellite_positions: SeriesWindow::new(&none, &[], &[]),
        latest_sunspot: 42.0,
    };
    ctx.predict(&window).map_err(|e| e.to_string())
}

#[test]
fn test_loaded_model_predicts_from_latest_hour() {
    let file = write_config([-10.0, -11.0]);
    let ctx = PredictorContext::load(file.path()).unwrap();
    let data = solar_wind(0..6 * 60, |m| -((m / 60) as f64));

    let (t0, t1) = predict(&ctx, &data).unwrap();
    // newest hour is hour 5 with bz = -5
    assert_eq!(t0, -10.0 + 10.0);
    assert_eq!(t1, -11.0);
}

#[test]
fn test_nan_hour_is_interpolated() {
    let file = write_config([0.0, 0.0]);
    let ctx = PredictorContext::load(file.path()).unwrap();
    // hour 4 has only NaN bz, hour 5 is the last
    let data = solar_wind(0..6 * 60, |m| match m / 60 {
        4 => f64::NAN,
        h => h as f64,
    });

    let ctx_features = ctx.features(&FeatureWindow {
        period: &Period::from("p1"),
        t0: Timedelta::from_days(7),
        solar_wind: SeriesWindow::new(&data.columns, &data.timestamps, &data.rows),
        satellite_positions: SeriesWindow::new(&[], &[], &[]),
        latest_sunspot: 42.0,
    })
    .unwrap();
    let bz = ctx_features.column_index("bz_gse_mean").unwrap();
    assert_eq!(ctx_features.column(bz), vec![2.0, 3.0, 4.0, 5.0]);

    assert_eq!(predict(&ctx, &data).unwrap().0, -10.0);
}

#[test]
fn test_trailing_nan_hour_is_carried_forward() {
    let file = write_config([0.0, 0.0]);
    let ctx = PredictorContext::load(file.path()).unwrap();
    let data = solar_wind(0..6 * 60, |m| if m >= 5 * 60 { f64::NAN } else { -3.0 });

    assert_eq!(predict(&ctx, &data).unwrap().0, 6.0);
}

#[test]
fn test_missing_hours_shrink_history() {
    let file = write_config([0.0, 0.0]);
    let ctx = PredictorContext::load(file.path()).unwrap();
    // three populated hours, with a hole between them
    let data = solar_wind((0..60).chain(3 * 60..5 * 60), |_| 0.0);

    let err = predict(&ctx, &data).unwrap_err();
    assert_eq!(err, PredictorError::InsufficientHistory { required: 4, actual: 3 }.to_string());
}

#[test]
fn test_leading_gap_yields_nan_forecast() {
    let file = write_config([0.0, 0.0]);
    let ctx = PredictorContext::load(file.path()).unwrap();
    // bz never observed: interpolation cannot fill it
    let data = solar_wind(0..4 * 60, |_| f64::NAN);

    let (t0, t1) = predict(&ctx, &data).unwrap();
    assert!(t0.is_nan());
    // horizon 1 has zero weights but 0 * NaN is NaN
    assert!(t1.is_nan());
}
