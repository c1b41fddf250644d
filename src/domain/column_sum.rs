use std::io::Write;

use anyhow::Result;
use csv::StringRecord;

use crate::csv::csv_reader::open_csv_reader;

pub const TARGET_COLUMN: usize = 8;
pub const MIN_FIELDS: usize = 2;

#[derive(Debug, PartialEq)]
pub enum RowOutcome {
    Added(f64),
    InvalidValue(String),
    MissingColumn,
    ShortRow,
}

#[derive(Debug)]
pub struct ColumnSummation {
    total: f64,
}

impl ColumnSummation {
    pub fn new() -> ColumnSummation {
        ColumnSummation { total: 0.0 }
    }

    pub fn apply_row(&mut self, record: &StringRecord) -> RowOutcome {
        if record.len() < MIN_FIELDS {
            return RowOutcome::ShortRow;
        }

        let raw = match record.get(TARGET_COLUMN) {
            Some(raw) => raw,
            None => return RowOutcome::MissingColumn,
        };

        match raw.trim().parse::<f64>() {
            Ok(value) => {
                self.total += value;
                RowOutcome::Added(value)
            }
            Err(_) => RowOutcome::InvalidValue(raw.to_string()),
        }
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

// Every failure mode short of an unwritable diagnostic sink degrades to
// "contributes zero, continue": a missing file, an unparsable cell and a row
// without the target column are all reported and absorbed here.
pub fn sum_column(path: &str, diagnostics: &mut impl Write) -> Result<f64> {
    let mut reader = match open_csv_reader(path) {
        Ok(reader) => reader,
        Err(err) => {
            writeln!(diagnostics, "{}", err)?;
            return Ok(0.0);
        }
    };

    let mut summation = ColumnSummation::new();

    for csv_record in reader.records() {
        let record = csv_record?;

        match summation.apply_row(&record) {
            RowOutcome::Added(_) | RowOutcome::ShortRow => {}
            RowOutcome::InvalidValue(raw) => {
                writeln!(diagnostics, "Skipping invalid value: {}", raw)?;
            }
            RowOutcome::MissingColumn => {
                writeln!(diagnostics, "Skipping row with missing value column")?;
            }
        }
    }

    Ok(summation.total())
}
