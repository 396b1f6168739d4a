// Merged trip dataset loading

use crate::core::constants::REQUIRED_COLUMNS;
use crate::core::error::{DashboardError, Result};
use crate::core::record::{RawTrip, TripRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Row counts for one loaded source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    pub path: String,
    pub rows: usize,
}

/// All trips from every source file, in load order. Never mutated after loading.
#[derive(Debug, Clone, Default)]
pub struct TripDataset {
    records: Vec<TripRecord>,
    sources: Vec<SourceSummary>,
}

impl TripDataset {
    /// Load and concatenate CSV files. Any unreadable file fails the whole load.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut dataset = TripDataset::default();

        for path in paths {
            let path = path.as_ref();
            let label = path.display().to_string();

            let records = File::open(path)
                .map_err(DashboardError::from)
                .and_then(Self::read_records)
                .map_err(|e| DashboardError::Load {
                    path: label.clone(),
                    source: Box::new(e),
                })?;

            debug!("Loaded {} trips from {}", records.len(), label);
            dataset.append(label, records);
        }

        info!(
            "Trip dataset ready: {} rows from {} files",
            dataset.len(),
            dataset.sources.len()
        );

        Ok(dataset)
    }

    /// Parse a single CSV source from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records = Self::read_records(reader)?;
        let mut dataset = TripDataset::default();
        dataset.append("<reader>".to_string(), records);
        Ok(dataset)
    }

    pub fn from_records(records: Vec<TripRecord>) -> Self {
        let mut dataset = TripDataset::default();
        dataset.append("<memory>".to_string(), records);
        dataset
    }

    fn read_records<R: Read>(reader: R) -> Result<Vec<TripRecord>> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == *column) {
                return Err(DashboardError::MissingColumn(*column));
            }
        }

        let mut records = Vec::new();
        let mut row = csv::StringRecord::new();
        while csv_reader.read_record(&mut row)? {
            let line = row.position().map_or(0, |p| p.line());
            let raw: RawTrip = row.deserialize(Some(&headers))?;
            records.push(TripRecord::from_raw(raw, line)?);
        }

        Ok(records)
    }

    fn append(&mut self, path: String, records: Vec<TripRecord>) {
        self.sources.push(SourceSummary {
            path,
            rows: records.len(),
        });
        self.records.extend(records);
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn sources(&self) -> &[SourceSummary] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
