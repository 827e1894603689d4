//! Time series store: loads the CSV inputs into [`TimeSeries`] tables.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use harness_api::InputPaths;
use harness_spi::{HarnessError, Period, Result, Timedelta, TimeSeries};
use tracing::{debug, info};

/// Name of the period identifier column.
pub const PERIOD_COLUMN: &str = "period";
/// Name of the duration-since-period-start column.
pub const TIMEDELTA_COLUMN: &str = "timedelta";
/// Label column of the Dst file.
pub const DST_COLUMN: &str = "dst";
/// Value column of the sunspot file.
pub const SUNSPOT_COLUMN: &str = "smoothed_ssn";

/// Name and required value columns of one input series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSchema {
    pub name: &'static str,
    pub required: &'static [&'static str],
}

impl SeriesSchema {
    pub const LABELS: SeriesSchema = SeriesSchema {
        name: "dst_labels",
        required: &[DST_COLUMN],
    };
    pub const SOLAR_WIND: SeriesSchema = SeriesSchema {
        name: "solar_wind",
        required: &[],
    };
    pub const SATELLITE_POSITIONS: SeriesSchema = SeriesSchema {
        name: "satellite_positions",
        required: &[],
    };
    pub const SUNSPOTS: SeriesSchema = SeriesSchema {
        name: "sunspots",
        required: &[SUNSPOT_COLUMN],
    };
}

/// The three feature series a forecaster may look at.
#[derive(Debug, Clone)]
pub struct FeatureStore {
    pub solar_wind: TimeSeries,
    pub satellite_positions: TimeSeries,
    pub sunspots: TimeSeries,
}

impl FeatureStore {
    /// Load every feature series from its file.
    pub fn load(paths: &InputPaths) -> Result<Self> {
        Ok(Self {
            solar_wind: load_series(&paths.solar_wind, SeriesSchema::SOLAR_WIND)?,
            satellite_positions: load_series(
                &paths.satellite_positions,
                SeriesSchema::SATELLITE_POSITIONS,
            )?,
            sunspots: load_series(&paths.sunspots, SeriesSchema::SUNSPOTS)?,
        })
    }
}

/// Fail with [`HarnessError::MissingInput`] unless every path exists.
pub fn ensure_inputs_exist(paths: &InputPaths) -> Result<()> {
    for path in paths.all() {
        if !path.exists() {
            return Err(HarnessError::MissingInput(path.to_path_buf()));
        }
    }
    Ok(())
}

/// Load one series from a CSV file.
pub fn load_series(path: &Path, schema: SeriesSchema) -> Result<TimeSeries> {
    info!("reading {} from {} ...", schema.name, path.display());
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => HarnessError::MissingInput(path.to_path_buf()),
        _ => HarnessError::io(path, e),
    })?;
    let series = read_series(BufReader::new(file), schema)?;
    info!("... read {} with {} rows", schema.name, series.len());
    Ok(series)
}

/// Parse a series from any CSV reader.
///
/// Every column other than `period` and `timedelta` is read as numeric.
/// Empty cells and `nan` are missing values. A non-required column holding
/// text is categorical metadata and is dropped; text in a required column
/// is an error.
pub fn read_series<R: Read>(reader: R, schema: SeriesSchema) -> Result<TimeSeries> {
    let malformed = |reason: String| HarnessError::malformed(schema.name, reason);

    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| malformed(format!("failed to read headers: {e}")))?
        .clone();

    let find = |name: &str| headers.iter().position(|h| h.trim() == name);
    let period_idx =
        find(PERIOD_COLUMN).ok_or_else(|| malformed(format!("missing column '{PERIOD_COLUMN}'")))?;
    let timedelta_idx = find(TIMEDELTA_COLUMN)
        .ok_or_else(|| malformed(format!("missing column '{TIMEDELTA_COLUMN}'")))?;
    for required in schema.required {
        if find(required).is_none() {
            return Err(malformed(format!("missing column '{required}'")));
        }
    }

    let value_columns: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != period_idx && *idx != timedelta_idx)
        .map(|(idx, name)| (idx, name.trim().to_string()))
        .collect();
    let mut categorical = vec![false; value_columns.len()];
    let mut rows = Vec::new();

    for (line, result) in reader.records().enumerate() {
        let record = result.map_err(|e| malformed(format!("failed to read record: {e}")))?;
        // +2: one for the header, one for 1-based line numbers
        let line = line + 2;

        let period = record
            .get(period_idx)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or_else(|| malformed(format!("line {line}: empty period")))?;
        let timedelta: Timedelta = record
            .get(timedelta_idx)
            .unwrap_or_default()
            .parse()
            .map_err(|e| malformed(format!("line {line}: {e}")))?;

        let mut values = Vec::with_capacity(value_columns.len());
        for (slot, (idx, name)) in value_columns.iter().enumerate() {
            let cell = record.get(*idx).unwrap_or_default();
            match parse_cell(cell) {
                Some(value) => values.push(value),
                None if schema.required.contains(&name.as_str()) => {
                    return Err(malformed(format!(
                        "line {line}: column '{name}' has non-numeric value '{cell}'"
                    )));
                }
                None => {
                    categorical[slot] = true;
                    values.push(f64::NAN);
                }
            }
        }
        rows.push((Period::from(period), timedelta, values));
    }

    let keep: Vec<usize> = (0..value_columns.len()).filter(|&s| !categorical[s]).collect();
    for (slot, (_, name)) in value_columns.iter().enumerate() {
        if categorical[slot] {
            debug!("{}: dropping non-numeric column '{}'", schema.name, name);
        }
    }

    let columns = keep.iter().map(|&s| value_columns[s].1.clone()).collect();
    let rows = rows.into_iter().map(|(period, timedelta, values)| {
        let projected = if keep.len() == values.len() {
            values
        } else {
            keep.iter().map(|&s| values[s]).collect()
        };
        (period, timedelta, projected)
    });

    TimeSeries::from_rows(schema.name, columns, rows)
}

/// `Some(NaN)` for empty or `nan` cells, `None` for text.
fn parse_cell(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case("nan") {
        return Some(f64::NAN);
    }
    cell.parse::<f64>().ok()
}
