pub use ndarray::Array1;

pub mod dataset;
pub mod error;
pub mod linear_model;
pub mod metrics;
pub mod params;
pub mod preprocessing;

pub use dataset::Dataset;
pub use error::Error;
pub use linear_model::{LinearModel, TrainConfig, train};
pub use preprocessing::MinMaxScaler;

pub type Vector = Array1<f64>;
