use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset contains no samples")]
    EmptyDataset,

    #[error("negative mileage {value} at data row {row}")]
    NegativeMileage { value: f64, row: usize },

    #[error("mileage and price counts must match ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },

    #[error("all {name} values are identical; min-max normalization is undefined")]
    ConstantColumn { name: &'static str },

    #[error("parameter file {path} not found")]
    ParamsMissing { path: PathBuf },

    #[error("parameter file {path} is malformed: {reason}")]
    ParamsMalformed { path: PathBuf, reason: String },
}
