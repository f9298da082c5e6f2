use crate::Vector;
use crate::dataset::Dataset;
use crate::error::Error;
use crate::preprocessing::MinMaxScaler;

/// Fitted coefficients of `price = theta0 + theta1 * mileage`.
///
/// The all-zero value doubles as the "untrained" sentinel that the
/// predictor refuses to evaluate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinearModel {
    pub theta0: f64,
    pub theta1: f64,
}

impl LinearModel {
    pub fn new(theta0: f64, theta1: f64) -> Self {
        Self { theta0, theta1 }
    }

    pub fn predict(&self, mileage: f64) -> f64 {
        self.theta0 + self.theta1 * mileage
    }

    pub fn is_trained(&self) -> bool {
        self.theta0 != 0.0 || self.theta1 != 0.0
    }
}

/// Gradient descent hyperparameters. Explicit fields instead of
/// hard-coded constants so tests can vary them deterministically.
#[derive(Clone, Copy, Debug)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub max_iterations: usize,
    pub convergence_threshold: f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            max_iterations: 1000,
            convergence_threshold: 1e-7,
        }
    }
}

/// Fits the model by batch gradient descent on min-max normalized
/// data, then maps the coefficients back to the raw scales.
pub fn train(dataset: &Dataset, config: &TrainConfig) -> Result<LinearModel, Error> {
    let mileage_scale = MinMaxScaler::fit(&dataset.mileages, "mileage")?;
    let price_scale = MinMaxScaler::fit(&dataset.prices, "price")?;

    let x = mileage_scale.transform(&dataset.mileages);
    let y = price_scale.transform(&dataset.prices);

    let (theta0, theta1) = descend(&x, &y, config);

    // Undo the normalization so the coefficients apply to raw mileages.
    let theta1_real = price_scale.span() * theta1 / mileage_scale.span();
    let theta0_real = price_scale.min() + price_scale.span() * theta0
        - theta1_real * mileage_scale.min();

    Ok(LinearModel::new(theta0_real, theta1_real))
}

/// Batch gradient descent on normalized inputs. Stops early when the
/// MSE change between consecutive iterations falls below the
/// convergence threshold.
fn descend(x: &Vector, y: &Vector, config: &TrainConfig) -> (f64, f64) {
    let m = x.len() as f64;
    let mut theta0 = 0.0;
    let mut theta1 = 0.0;
    let mut prev_mse = f64::INFINITY;

    for iteration in 0..config.max_iterations {
        let error = x * theta1 + theta0 - y;
        let mse = error.dot(&error) / m;

        if (prev_mse - mse).abs() < config.convergence_threshold {
            tracing::debug!(iteration, mse, "gradient descent converged");
            break;
        }

        theta0 -= config.learning_rate * error.sum() / m;
        theta1 -= config.learning_rate * error.dot(x) / m;
        prev_mse = mse;
    }

    (theta0, theta1)
}
