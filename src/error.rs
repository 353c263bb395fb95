use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("unknown search type: {0}")]
    UnknownSearchType(String),
    #[error("invalid chunk location: {0} (expected world/x/z)")]
    InvalidChunkLocation(String),
    #[error("invalid chunk coordinate: {0}")]
    InvalidCoordinate(#[from] ParseIntError),
}
