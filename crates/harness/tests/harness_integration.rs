//! Integration tests for the harness
//!
//! Exercises loading, framing, windowing, replay and scoring together on
//! in-memory inputs with more than one period.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::time::Duration;

use harness::{
    build_ground_truth, build_submission_frame, check_aligned, fn_predictor, read_series, score,
    write_submission_to, FeatureStore, HarnessError, Period, PredictionRunner, SeriesSchema,
    SubmissionTable, Timedelta, ValidationPolicy, WindowExtractor,
};

fn hourly_csv(header: &str, periods: &[(&str, i64)], value: impl Fn(i64) -> String) -> String {
    let mut text = format!("period,timedelta,{header}\n");
    for (period, hours) in periods {
        for h in 0..=*hours {
            writeln!(text, "{period},{},{}", Timedelta::from_hours(h), value(h)).unwrap();
        }
    }
    text
}

struct Inputs {
    labels: String,
    solar_wind: String,
    positions: String,
    sunspots: String,
}

fn inputs() -> Inputs {
    let periods = [("train_a", 180), ("train_b", 172)];
    Inputs {
        labels: hourly_csv("dst", &periods, |h| format!("{}", -(h % 10))),
        solar_wind: hourly_csv("bt,speed,source", &periods, |h| format!("{},{},dscovr", h % 7, 350 + h)),
        positions: hourly_csv("gse_x_ace", &periods, |h| format!("{}", h * 100)),
        sunspots: "period,timedelta,smoothed_ssn\n\
                   train_a,0 days 00:00:00,40.5\n\
                   train_b,0 days 00:00:00,80.0\n\
                   train_b,7 days 02:00:00,82.0\n"
            .to_string(),
    }
}

fn load(inputs: &Inputs) -> (harness::TimeSeries, FeatureStore) {
    let labels = read_series(inputs.labels.as_bytes(), SeriesSchema::LABELS).unwrap();
    let store = FeatureStore {
        solar_wind: read_series(inputs.solar_wind.as_bytes(), SeriesSchema::SOLAR_WIND).unwrap(),
        satellite_positions: read_series(
            inputs.positions.as_bytes(),
            SeriesSchema::SATELLITE_POSITIONS,
        )
        .unwrap(),
        sunspots: read_series(inputs.sunspots.as_bytes(), SeriesSchema::SUNSPOTS).unwrap(),
    };
    (labels, store)
}

fn runner() -> PredictionRunner {
    PredictionRunner::new(Duration::from_secs(30), ValidationPolicy::default())
}

#[test]
fn test_frame_covers_both_periods_in_source_order() {
    let (labels, _) = load(&inputs());
    let frame = build_submission_frame(&labels);
    let groups = frame.by_period();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0.as_str(), "train_a");
    // hours 168..=179 for a, 168..=171 for b
    assert_eq!(groups[0].1.len(), 12);
    assert_eq!(groups[1].1.len(), 4);
}

#[test]
fn test_periods_do_not_leak_into_each_other() {
    let inputs = inputs();
    let (labels, store) = load(&inputs);
    let frame = build_submission_frame(&labels);
    let extractor = WindowExtractor::new(&store).unwrap();

    let seen = RefCell::new(Vec::new());
    let predictor = fn_predictor("spy", |w| {
        seen.borrow_mut().push((w.period.clone(), w.t0, w.latest_sunspot, w.solar_wind.len()));
        Ok((0.0, 0.0))
    });
    runner().run(&frame, &extractor, &predictor).unwrap();

    let seen = seen.into_inner();
    assert_eq!(seen.len(), frame.len());
    for (period, t0, sunspot, solar_wind_len) in &seen {
        // hourly data: [t0 - 7d, t0 - 1min] holds exactly 168 samples
        assert_eq!(*solar_wind_len, 168);
        match period.as_str() {
            "train_a" => assert_eq!(*sunspot, 40.5),
            "train_b" if *t0 < Timedelta::from_hours(170) => assert_eq!(*sunspot, 80.0),
            "train_b" => assert_eq!(*sunspot, 82.0),
            other => panic!("unexpected period {other}"),
        }
    }
}

#[test]
fn test_categorical_column_is_dropped() {
    let (_, store) = load(&inputs());
    assert_eq!(store.solar_wind.columns(), &["bt".to_string(), "speed".to_string()]);
}

#[test]
fn test_replay_score_and_write() {
    let (labels, store) = load(&inputs());
    let frame = build_submission_frame(&labels);
    let truth = build_ground_truth(&labels, &frame).unwrap();
    check_aligned(&frame, &truth).unwrap();
    let extractor = WindowExtractor::new(&store).unwrap();

    // persistence: the last visible bt as both forecasts
    let predictor = fn_predictor("persistence", |w| {
        let bt = w.solar_wind.column("bt").unwrap_or_default();
        let last = bt.last().copied().unwrap_or(f64::NAN);
        Ok((-last, -last))
    });
    let (submission, summary) = runner().run(&frame, &extractor, &predictor).unwrap();
    assert_eq!(summary.points, frame.len());
    assert_eq!(summary.sentinel_substitutions, 0);

    let rmse = score(&submission, &truth).unwrap();
    assert!(rmse.is_finite() && rmse > 0.0);

    let mut buf = Vec::new();
    write_submission_to(&mut buf, &submission).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), frame.len() + 1);
    assert!(text.starts_with("period,timedelta,t0,t1\ntrain_a,7 days 00:00:00,"));
}

#[test]
fn test_score_rejects_misaligned_submission() {
    let (labels, _) = load(&inputs());
    let frame = build_submission_frame(&labels);
    let truth = build_ground_truth(&labels, &frame).unwrap();

    let mut reversed: Vec<_> = frame.iter().cloned().collect();
    reversed.reverse();
    let submission: SubmissionTable = reversed
        .into_iter()
        .map(|p| harness::PredictionRecord::new(p, 0.0, 0.0))
        .collect();

    assert!(matches!(
        score(&submission, &truth),
        Err(HarnessError::IndexMismatch(_))
    ));
}

#[test]
fn test_period_without_features_is_missing_feature() {
    let mut inputs = inputs();
    for h in 0..=170 {
        writeln!(inputs.labels, "orphan,{},0", Timedelta::from_hours(h)).unwrap();
    }
    let (labels, store) = load(&inputs);
    let frame = build_submission_frame(&labels);
    let extractor = WindowExtractor::new(&store).unwrap();
    let predictor = fn_predictor("zero", |_| Ok((0.0, 0.0)));

    match runner().run(&frame, &extractor, &predictor) {
        Err(HarnessError::MissingFeature { period, .. }) => {
            assert_eq!(period, Period::from("orphan"))
        }
        other => panic!("Expected MissingFeature, got {:?}", other.map(|(t, _)| t.len())),
    }
}
