use thiserror::Error;

use crate::api::VisualChannel;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("duplicate column name `{name}`")]
    DuplicateColumn { name: String },

    #[error("row width mismatch: expected {expected} cells, got {actual}")]
    RowWidthMismatch { expected: usize, actual: usize },

    #[error("unknown column `{0}`")]
    UnknownColumn(String),

    #[error("visual channel `{0:?}` does not support frame operations")]
    UnsupportedChannel(VisualChannel),
}
