use crate::Vector;
use crate::dataset::Dataset;
use crate::error::Error;
use crate::linear_model::LinearModel;

/// Fit-quality summary on the raw (unnormalized) samples.
#[derive(Clone, Copy, Debug)]
pub struct Evaluation {
    pub mae: f64,
    pub mse: f64,
    pub r_squared: f64,
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, Error> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.dot(&diff) / y_true.len() as f64)
}

pub fn mean_absolute_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, Error> {
    check_lengths(y_true, y_pred)?;

    let diff = y_true - y_pred;
    Ok(diff.mapv(f64::abs).sum() / y_true.len() as f64)
}

/// Coefficient of determination. NaN when all true values are
/// identical, since the total sum of squares is zero.
pub fn r2_score(y_true: &Vector, y_pred: &Vector) -> Result<f64, Error> {
    check_lengths(y_true, y_pred)?;

    let y_mean = y_true.sum() / y_true.len() as f64;
    let residuals = y_true - y_pred;
    let ss_res = residuals.dot(&residuals);
    let ss_tot = y_true.mapv(|y| (y - y_mean) * (y - y_mean)).sum();

    if ss_tot == 0.0 {
        return Ok(f64::NAN);
    }

    Ok(1.0 - ss_res / ss_tot)
}

/// Evaluates a fitted model against the original samples.
pub fn evaluate(model: &LinearModel, dataset: &Dataset) -> Result<Evaluation, Error> {
    let predictions = dataset.mileages.mapv(|mileage| model.predict(mileage));

    Ok(Evaluation {
        mae: mean_absolute_error(&dataset.prices, &predictions)?,
        mse: mean_squared_error(&dataset.prices, &predictions)?,
        r_squared: r2_score(&dataset.prices, &predictions)?,
    })
}

fn check_lengths(y_true: &Vector, y_pred: &Vector) -> Result<(), Error> {
    if y_true.len() != y_pred.len() {
        return Err(Error::LengthMismatch {
            left: y_true.len(),
            right: y_pred.len(),
        });
    }
    Ok(())
}
