use thiserror::Error;

/// Errors that can occur while converting a menu table
#[derive(Error, Debug)]
pub enum ImportError {
    /// Failed to read the input or write the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input file is not valid UTF-8
    #[error("Input is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The CSV header could not be read
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to serialize the output document
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Required columns are absent from the header row
    #[error("Missing required columns: {}. Found columns: {}", .missing.join(", "), .found.join(", "))]
    MissingColumns {
        missing: Vec<String>,
        found: Vec<String>,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}
