use std::path::Path;

use crate::Vector;
use crate::error::Error;

/// Mileage/price samples loaded from a dataset file. Both columns are
/// kept as parallel vectors; row order carries no meaning.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub mileages: Vector,
    pub prices: Vector,
}

impl Dataset {
    pub fn new(mileages: Vector, prices: Vector) -> Result<Self, Error> {
        if mileages.len() != prices.len() {
            return Err(Error::LengthMismatch {
                left: mileages.len(),
                right: prices.len(),
            });
        }
        if mileages.is_empty() {
            return Err(Error::EmptyDataset);
        }
        if let Some((row, &value)) = mileages.iter().enumerate().find(|&(_, &m)| m < 0.0) {
            return Err(Error::NegativeMileage { value, row });
        }

        Ok(Self { mileages, prices })
    }

    /// Loads samples from a CSV file with a header row and two numeric
    /// columns (mileage, price). Columns are read by position, so the
    /// header names do not matter.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;

        let mut mileages = Vec::new();
        let mut prices = Vec::new();
        for result in reader.deserialize::<(f64, f64)>() {
            let (mileage, price) = result.map_err(|source| Error::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            mileages.push(mileage);
            prices.push(price);
        }

        Self::new(Vector::from(mileages), Vector::from(prices))
    }

    pub fn len(&self) -> usize {
        self.mileages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mileages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("carpricer-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_dataset_creation() {
        let dataset = Dataset::new(array![1000.0, 2000.0], array![9.0, 8.0]).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_length_mismatch() {
        let result = Dataset::new(array![1.0, 2.0], array![1.0]);
        assert!(matches!(result, Err(Error::LengthMismatch { .. })));
    }

    #[test]
    fn test_empty_dataset() {
        let result = Dataset::new(Vector::zeros(0), Vector::zeros(0));
        assert!(matches!(result, Err(Error::EmptyDataset)));
    }

    #[test]
    fn test_negative_mileage_rejected() {
        let result = Dataset::new(array![1.0, -3.0], array![1.0, 2.0]);
        assert!(matches!(
            result,
            Err(Error::NegativeMileage { row: 1, .. })
        ));
    }

    #[test]
    fn test_from_csv() {
        let path = temp_path("data.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "km,price").unwrap();
        writeln!(file, "240000,3650").unwrap();
        writeln!(file, "139800,3800").unwrap();
        drop(file);

        let dataset = Dataset::from_csv(&path).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.mileages[0], 240000.0);
        assert_eq!(dataset.prices[1], 3800.0);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_csv_missing_file() {
        let result = Dataset::from_csv(temp_path("no-such-file.csv"));
        assert!(matches!(result, Err(Error::Csv { .. })));
    }

    #[test]
    fn test_from_csv_non_numeric_field() {
        let path = temp_path("bad-data.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "km,price").unwrap();
        writeln!(file, "240000,cheap").unwrap();
        drop(file);

        let result = Dataset::from_csv(&path);
        assert!(matches!(result, Err(Error::Csv { .. })));

        std::fs::remove_file(&path).unwrap();
    }
}
