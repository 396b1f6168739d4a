// Error handling for the taxi dashboard

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to load {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: Box<DashboardError>,
    },

    #[error("Missing column: {0}")]
    MissingColumn(&'static str),

    #[error("Invalid timestamp on line {line}: {value:?}")]
    InvalidTimestamp { line: u64, value: String },

    #[error("Unknown {field} selection: {value:?}")]
    UnknownSelection { field: &'static str, value: String },
}

impl DashboardError {
    pub fn unknown_selection(field: &'static str, value: impl Into<String>) -> Self {
        DashboardError::UnknownSelection {
            field,
            value: value.into(),
        }
    }

    /// True for errors caused by user input rather than the data files.
    pub fn is_selection_error(&self) -> bool {
        matches!(self, DashboardError::UnknownSelection { .. })
    }
}
