use crate::error::{Result, SoilError};
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use soil_utils::dates::parse_date_lenient;
use std::{fs::File, io::Read, path::Path};

/// Header of the date column in the exporter's CSV.
pub const DATE_COLUMN: &str = "Date";

/// Header of the moisture column in the exporter's CSV.
pub const MOISTURE_COLUMN: &str = "SoilMoisture";

/// One row of the input table.
///
/// - `row`: 0-based position in the source file, used as the tie-breaker
///   when sorting
/// - `date`: `None` when the cell could not be parsed as a date
/// - `soil_moisture`: `None` when the cell is empty or not a finite number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub row: usize,
    pub date: Option<NaiveDate>,
    pub soil_moisture: Option<f64>,
}

impl Reading {
    pub fn new(row: usize, date: Option<NaiveDate>, soil_moisture: Option<f64>) -> Self {
        Reading {
            row,
            date,
            soil_moisture,
        }
    }
}

/// Readings in table order. Sorting is left to the data crate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset(pub Vec<Reading>);

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    date: usize,
    moisture: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| SoilError::MissingColumn(name.to_string()))
        };
        Ok(ColumnIndex {
            date: find(DATE_COLUMN)?,
            moisture: find(MOISTURE_COLUMN)?,
        })
    }
}

impl Dataset {
    /// Load readings from a CSV file on disk.
    ///
    /// A missing or unreadable file is an error; bad cells are not.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        let path = path.as_ref();
        info!("Loading soil moisture readings from {}", path.display());
        let file = File::open(path).map_err(|source| SoilError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Dataset::from_reader(file)
    }

    /// Load readings from any CSV source with a header row containing
    /// `Date` and `SoilMoisture`. Other columns are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Dataset> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let columns = ColumnIndex::from_headers(rdr.headers()?)?;

        let mut readings = Vec::new();
        for (row, result) in rdr.records().enumerate() {
            let record = result?;
            let date = record.get(columns.date).and_then(parse_date_lenient);
            let soil_moisture = record.get(columns.moisture).and_then(parse_moisture);
            readings.push(Reading::new(row, date, soil_moisture));
        }

        let dataset = Dataset(readings);
        info!("Loaded {} readings", dataset.len());
        let missing_dates = dataset.missing_date_count();
        if missing_dates > 0 {
            warn!("{} readings have an unparseable date and were kept without one", missing_dates);
        }
        let missing_values = dataset.missing_moisture_count();
        if missing_values > 0 {
            warn!("{} readings have no numeric soil moisture value", missing_values);
        }
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.0.iter()
    }

    pub fn readings(&self) -> &[Reading] {
        &self.0
    }

    pub fn missing_date_count(&self) -> usize {
        self.0.iter().filter(|r| r.date.is_none()).count()
    }

    pub fn missing_moisture_count(&self) -> usize {
        self.0.iter().filter(|r| r.soil_moisture.is_none()).count()
    }

    /// Moisture column in table order.
    pub fn moisture(&self) -> Vec<Option<f64>> {
        self.0.iter().map(|r| r.soil_moisture).collect()
    }
}

impl FromIterator<Reading> for Dataset {
    fn from_iter<I: IntoIterator<Item = Reading>>(iter: I) -> Self {
        Dataset(iter.into_iter().collect())
    }
}

fn parse_moisture(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
