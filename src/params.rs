use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::linear_model::LinearModel;

/// One-row CSV record holding the fitted coefficients. The header row
/// (`theta0,theta1`) comes from the field names.
#[derive(Debug, Deserialize, Serialize)]
struct ParamRecord {
    theta0: f64,
    theta1: f64,
}

pub fn save<P: AsRef<Path>>(model: &LinearModel, path: P) -> Result<(), Error> {
    let path = path.as_ref();
    let csv_error = |source| Error::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer
        .serialize(ParamRecord {
            theta0: model.theta0,
            theta1: model.theta1,
        })
        .map_err(csv_error)?;
    writer.flush().map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

/// Reads the coefficients back, distinguishing a missing file from
/// malformed content. Rows beyond the first are ignored.
pub fn load<P: AsRef<Path>>(path: P) -> Result<LinearModel, Error> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::ParamsMissing {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::Reader::from_path(path).map_err(|source| Error::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let record: ParamRecord = reader
        .deserialize()
        .next()
        .ok_or_else(|| Error::ParamsMalformed {
            path: path.to_path_buf(),
            reason: "no data row after the header".to_string(),
        })?
        .map_err(|source| Error::ParamsMalformed {
            path: path.to_path_buf(),
            reason: source.to_string(),
        })?;

    Ok(LinearModel::new(record.theta0, record.theta1))
}

/// Load with the untrained fallback: any read failure is logged and
/// the `(0, 0)` sentinel is substituted.
pub fn load_or_untrained<P: AsRef<Path>>(path: P) -> LinearModel {
    match load(path) {
        Ok(model) => model,
        Err(error) => {
            tracing::warn!(%error, "could not load parameters, treating model as untrained");
            LinearModel::default()
        }
    }
}
