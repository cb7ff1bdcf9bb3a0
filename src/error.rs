use std::fmt;
use std::path::PathBuf;

/// Everything that can go wrong in a conversion run. Any variant aborts the
/// remaining stages; there is no retry or partial recovery.
#[derive(Debug)]
pub enum ConvertError {
    InputNotFound(PathBuf),
    Parse(String),
    EmptyInput,
    DateColumnNotFound,
    Write(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InputNotFound(path) => {
                write!(f, "Input file not found: {}", path.display())
            }
            ConvertError::Parse(msg) => write!(f, "Failed to parse CSV: {}", msg),
            ConvertError::EmptyInput => write!(f, "The CSV file is empty"),
            ConvertError::DateColumnNotFound => {
                write!(f, "Could not find a column with dates in YYYYMMDD format")
            }
            ConvertError::Write(msg) => write!(f, "Failed to write output: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}
