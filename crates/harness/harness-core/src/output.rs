//! CSV output of the submission table.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use harness_spi::{HarnessError, Result, SubmissionTable};
use tracing::info;

use crate::store::{PERIOD_COLUMN, TIMEDELTA_COLUMN};

/// Write `table` to `path` as `period,timedelta,t0,t1`, one row per point in table order.
pub fn write_submission(path: &Path, table: &SubmissionTable) -> Result<()> {
    info!("writing {} rows out to {}", table.len(), path.display());
    let file = File::create(path).map_err(|e| HarnessError::io(path, e))?;
    write_submission_to(BufWriter::new(file), table).map_err(|e| match e {
        HarnessError::Io { reason, .. } => HarnessError::io(path, reason),
        other => other,
    })
}

/// Write `table` as CSV to any writer.
pub fn write_submission_to<W: Write>(writer: W, table: &SubmissionTable) -> Result<()> {
    let to_err = |e: csv::Error| HarnessError::io("<submission>", e);

    let mut writer = csv::Writer::from_writer(writer);
    writer
        .write_record([PERIOD_COLUMN, TIMEDELTA_COLUMN, "t0", "t1"])
        .map_err(to_err)?;
    for record in table.iter() {
        writer
            .write_record([
                record.point.period.to_string(),
                record.point.timedelta.to_string(),
                record.t0.to_string(),
                record.t1.to_string(),
            ])
            .map_err(to_err)?;
    }
    writer
        .flush()
        .map_err(|e| HarnessError::io("<submission>", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use harness_spi::{EvaluationPoint, PredictionRecord, Timedelta};

    fn table() -> SubmissionTable {
        vec![
            PredictionRecord::new(EvaluationPoint::new("p1", Timedelta::from_days(7)), -12.0, 5.5),
            PredictionRecord::new(
                EvaluationPoint::new("p1", Timedelta::from_hours(169)),
                -20.25,
                -18.0,
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_write_submission_layout() {
        let mut buffer = Vec::new();
        write_submission_to(&mut buffer, &table()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "period,timedelta,t0,t1\n\
             p1,7 days 00:00:00,-12,5.5\n\
             p1,7 days 01:00:00,-20.25,-18\n"
        );
    }

    #[test]
    fn test_write_submission_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("submission.csv");
        write_submission(&path, &table()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_write_submission_bad_path() {
        let result = write_submission(Path::new("/no/such/dir/out.csv"), &table());
        assert!(matches!(result, Err(HarnessError::Io { .. })));
    }
}
