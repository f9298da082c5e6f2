use carpricer::linear_model::{TrainConfig, train};
use carpricer::{Dataset, metrics};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Step 1: Load the bundled mileage/price samples
    let dataset = Dataset::from_csv("data.csv")?;
    println!("Dataset: {} samples", dataset.len());

    // Step 2: Fit with the default hyperparameters
    let model = train(&dataset, &TrainConfig::default())?;
    println!("theta0: {:.4}", model.theta0);
    println!("theta1: {:.6}", model.theta1);

    // Step 3: Evaluate the fit on the raw samples
    let eval = metrics::evaluate(&model, &dataset)?;
    println!("MAE: {:.2}", eval.mae);
    println!("MSE: {:.2}", eval.mse);
    println!("R²:  {:.4}", eval.r_squared);

    // Step 4: Estimate a price
    let mileage = 150_000.0;
    println!("Estimated price at {} km: {:.2}", mileage, model.predict(mileage));

    Ok(())
}
