/// Error types for the soil moisture library
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for soil moisture operations
#[derive(Error, Debug)]
pub enum SoilError {
    /// Input file could not be opened or read
    #[error("Failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A required header is absent
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// Moving-average window must be at least one sample
    #[error("Invalid moving-average window: {0}")]
    InvalidWindow(usize),

    /// Drought threshold must sit below the flood threshold
    #[error("Invalid thresholds: drought ({drought}) must be below flood ({flood})")]
    InvalidThresholds { drought: f64, flood: f64 },

    /// Image dimensions must be non-zero
    #[error("Invalid figure size: {width}x{height}")]
    InvalidFigureSize { width: u32, height: u32 },

    /// Nothing has both a date and a moisture value
    #[error("No readings with both a valid date and a moisture value")]
    NoPlottableReadings,

    /// Drawing or encoding the chart failed
    #[error("Failed to render chart: {0}")]
    Render(String),
}

/// Type alias for Results using SoilError
pub type Result<T> = std::result::Result<T, SoilError>;
