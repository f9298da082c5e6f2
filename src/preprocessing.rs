use crate::Vector;
use crate::error::Error;

/// Min-max rescaling of a single column into [0, 1], fitted from the
/// observed extrema. Mileage and price live on very different scales;
/// without this a single learning rate cannot serve both coefficients.
#[derive(Clone, Copy, Debug)]
pub struct MinMaxScaler {
    min: f64,
    max: f64,
}

impl MinMaxScaler {
    pub fn fit(values: &Vector, name: &'static str) -> Result<Self, Error> {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if !(max > min) {
            return Err(Error::ConstantColumn { name });
        }

        Ok(Self { min, max })
    }

    pub fn transform(&self, values: &Vector) -> Vector {
        values.mapv(|v| (v - self.min) / (self.max - self.min))
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}
