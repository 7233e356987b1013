//! Error types for resistor-bands.

use thiserror::Error;

/// Result alias for resistor-bands operations.
pub type BandResult<T> = std::result::Result<T, BandError>;

/// Errors that abort a band reading.
///
/// Per-row anomalies (low confidence, class index outside the label table)
/// are not errors; those rows are dropped and the run continues.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BandError {
    /// A raw output row is too short to hold box, confidence and class.
    #[error("row {row} has {len} fields, at least {needed} are required")]
    InputShape {
        row: usize,
        len: usize,
        needed: usize,
    },
    /// The backing buffer cannot hold the declared rows.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// The row stride is smaller than the row length.
    #[error("invalid stride {stride} for row length {row_len}")]
    InvalidStride { row_len: usize, stride: usize },
    /// A configuration value is out of range.
    #[error("invalid config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f32 },
    /// The label table has no entries.
    #[error("label table is empty")]
    EmptyLabelTable,
}
