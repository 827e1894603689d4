//! Lookback windows for an evaluation point.
//!
//! The inclusivity rules are a leakage boundary and differ per series:
//!
//! | series              | window                                        |
//! |---------------------|-----------------------------------------------|
//! | solar wind          | `[t0 - 7 days, t0 - 1 minute]`, excludes `t0` |
//! | satellite positions | last 7 samples at or before `t0`              |
//! | sunspots            | latest value at or before `t0`                |

use harness_spi::{
    EvaluationPoint, FeatureWindow, HarnessError, Period, PeriodSeries, Result, SeriesWindow,
    Timedelta, TimeSeries,
};

use crate::store::{FeatureStore, SUNSPOT_COLUMN};

/// Solar-wind lookback.
pub const SOLAR_WIND_LOOKBACK: Timedelta = Timedelta::from_days(7);
/// Gap between the last visible solar-wind sample and `t0`.
pub const SOLAR_WIND_LAG: Timedelta = Timedelta::from_minutes(1);
/// Number of satellite positions handed to the predictor.
pub const SATELLITE_POSITIONS_COUNT: usize = 7;

/// Slices the feature store into per-point windows.
#[derive(Debug, Clone, Copy)]
pub struct WindowExtractor<'a> {
    store: &'a FeatureStore,
    sunspot_column: usize,
}

impl<'a> WindowExtractor<'a> {
    /// Fails with [`HarnessError::MalformedInput`] when the sunspot series has no `smoothed_ssn`.
    pub fn new(store: &'a FeatureStore) -> Result<Self> {
        let sunspot_column = store.sunspots.column_index(SUNSPOT_COLUMN).ok_or_else(|| {
            HarnessError::malformed(
                store.sunspots.name(),
                format!("missing column '{SUNSPOT_COLUMN}'"),
            )
        })?;
        Ok(Self {
            store,
            sunspot_column,
        })
    }

    /// Build the windows visible at `point`.
    ///
    /// Fails with [`HarnessError::MissingFeature`] when a feature series has
    /// no data for the period or no sunspot value exists at or before `t0`.
    pub fn extract<'p>(&self, point: &'p EvaluationPoint) -> Result<FeatureWindow<'p>>
    where
        'a: 'p,
    {
        let period = &point.period;
        let t0 = point.timedelta;

        let solar_wind = solar_wind_window(
            &self.store.solar_wind,
            require(&self.store.solar_wind, period, t0)?,
            t0,
        );
        let satellite_positions = satellite_positions_window(
            &self.store.satellite_positions,
            require(&self.store.satellite_positions, period, t0)?,
            t0,
        );
        let latest_sunspot = latest_value(
            require(&self.store.sunspots, period, t0)?,
            self.sunspot_column,
            t0,
        )
        .ok_or_else(|| HarnessError::MissingFeature {
            feature: SUNSPOT_COLUMN.to_string(),
            period: period.clone(),
            timestamp: t0,
        })?;

        Ok(FeatureWindow {
            period,
            t0,
            solar_wind,
            satellite_positions,
            latest_sunspot,
        })
    }
}

fn require<'s>(series: &'s TimeSeries, period: &Period, t0: Timedelta) -> Result<&'s PeriodSeries> {
    series
        .period(period)
        .ok_or_else(|| HarnessError::MissingFeature {
            feature: series.name().to_string(),
            period: period.clone(),
            timestamp: t0,
        })
}

/// Samples with `t0 - 7 days <= t <= t0 - 1 minute`.
pub fn solar_wind_window<'s>(
    series: &'s TimeSeries,
    data: &'s PeriodSeries,
    t0: Timedelta,
) -> SeriesWindow<'s> {
    let start = data.count_before(t0 - SOLAR_WIND_LOOKBACK);
    let end = data.count_at_or_before(t0 - SOLAR_WIND_LAG);
    data.slice(series.columns(), start, end)
}

/// Up to seven most recent samples with `t <= t0`, no padding.
pub fn satellite_positions_window<'s>(
    series: &'s TimeSeries,
    data: &'s PeriodSeries,
    t0: Timedelta,
) -> SeriesWindow<'s> {
    let end = data.count_at_or_before(t0);
    let start = end.saturating_sub(SATELLITE_POSITIONS_COUNT);
    data.slice(series.columns(), start, end)
}

/// Most recent value of `column` with `t <= t0`.
pub fn latest_value(data: &PeriodSeries, column: usize, t0: Timedelta) -> Option<f64> {
    let end = data.count_at_or_before(t0);
    end.checked_sub(1).map(|idx| data.rows()[idx][column])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str, column: &str, samples: Vec<(i64, f64)>) -> TimeSeries {
        TimeSeries::from_rows(
            name,
            vec![column.to_string()],
            samples
                .into_iter()
                .map(|(minutes, v)| (Period::from("p1"), Timedelta::from_minutes(minutes), vec![v])),
        )
        .unwrap()
    }

    fn store() -> FeatureStore {
        let day = 24 * 60;
        FeatureStore {
            // every minute for nine days
            solar_wind: series("solar_wind", "bt", (0..=9 * day).map(|m| (m, m as f64)).collect()),
            // daily
            satellite_positions: series(
                "satellite_positions",
                "gse_x_ace",
                (0..=9).map(|d| (d * day, d as f64)).collect(),
            ),
            // monthly-ish, first value after one day
            sunspots: series("sunspots", "smoothed_ssn", vec![(day, 50.0), (8 * day, 60.0)]),
        }
    }

    #[test]
    fn test_solar_wind_excludes_t0() {
        let store = store();
        let extractor = WindowExtractor::new(&store).unwrap();
        let point = EvaluationPoint::new("p1", Timedelta::from_days(7));
        let window = extractor.extract(&point).unwrap();

        assert_eq!(window.solar_wind.first_timestamp(), Some(Timedelta::ZERO));
        assert_eq!(
            window.solar_wind.last_timestamp(),
            Some(Timedelta::from_days(7) - Timedelta::from_minutes(1))
        );
        assert!(window
            .solar_wind
            .timestamps()
            .iter()
            .all(|t| *t < point.timedelta));
        assert_eq!(window.solar_wind.len(), 7 * 24 * 60);
    }

    #[test]
    fn test_solar_wind_lower_bound_is_inclusive() {
        let store = store();
        let extractor = WindowExtractor::new(&store).unwrap();
        let point = EvaluationPoint::new("p1", Timedelta::from_days(8));
        let window = extractor.extract(&point).unwrap();
        assert_eq!(window.solar_wind.first_timestamp(), Some(Timedelta::from_days(1)));
    }

    #[test]
    fn test_solar_wind_sub_minute_sample_before_t0_is_hidden() {
        let data = TimeSeries::from_rows(
            "solar_wind",
            vec!["bt".to_string()],
            vec![
                (Period::from("p1"), Timedelta::from_seconds(0), vec![1.0]),
                (Period::from("p1"), Timedelta::from_seconds(90), vec![2.0]),
            ],
        )
        .unwrap();
        let p1 = data.period(&Period::from("p1")).unwrap();
        let window = solar_wind_window(&data, p1, Timedelta::from_minutes(2));
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn test_satellite_positions_include_t0_and_cap_at_seven() {
        let store = store();
        let extractor = WindowExtractor::new(&store).unwrap();
        let point = EvaluationPoint::new("p1", Timedelta::from_days(9));
        let window = extractor.extract(&point).unwrap();

        assert_eq!(window.satellite_positions.len(), SATELLITE_POSITIONS_COUNT);
        assert_eq!(window.satellite_positions.last_timestamp(), Some(Timedelta::from_days(9)));
        assert_eq!(window.satellite_positions.first_timestamp(), Some(Timedelta::from_days(3)));
    }

    #[test]
    fn test_satellite_positions_not_padded() {
        let store = store();
        let p1 = store.satellite_positions.period(&Period::from("p1")).unwrap();
        let window = satellite_positions_window(
            &store.satellite_positions,
            p1,
            Timedelta::from_days(2) + Timedelta::from_hours(12),
        );
        assert_eq!(window.len(), 3);
        assert_eq!(window.column("gse_x_ace"), Some(vec![0.0, 1.0, 2.0]));
    }

    #[test]
    fn test_latest_sunspot_is_inclusive() {
        let store = store();
        let extractor = WindowExtractor::new(&store).unwrap();

        let before = EvaluationPoint::new("p1", Timedelta::from_days(8) - Timedelta::from_minutes(1));
        assert_eq!(extractor.extract(&before).unwrap().latest_sunspot, 50.0);

        let at = EvaluationPoint::new("p1", Timedelta::from_days(8));
        assert_eq!(extractor.extract(&at).unwrap().latest_sunspot, 60.0);
    }

    #[test]
    fn test_missing_sunspot_is_an_error() {
        let store = store();
        let p1 = store.sunspots.period(&Period::from("p1")).unwrap();
        assert_eq!(latest_value(p1, 0, Timedelta::from_hours(23)), None);

        let extractor = WindowExtractor::new(&store).unwrap();
        let point = EvaluationPoint::new("p1", Timedelta::from_hours(23));
        match extractor.extract(&point) {
            Err(HarnessError::MissingFeature { feature, .. }) => assert_eq!(feature, "smoothed_ssn"),
            other => panic!("Expected MissingFeature, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_period_is_an_error() {
        let store = store();
        let extractor = WindowExtractor::new(&store).unwrap();
        let point = EvaluationPoint::new("p2", Timedelta::from_days(7));
        match extractor.extract(&point) {
            Err(HarnessError::MissingFeature { feature, period, .. }) => {
                assert_eq!(feature, "solar_wind");
                assert_eq!(period.as_str(), "p2");
            }
            other => panic!("Expected MissingFeature, got {:?}", other),
        }
    }
}
