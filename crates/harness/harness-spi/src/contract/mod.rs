//! Contract module containing the external predictor trait

mod predictor;

pub use predictor::{fn_predictor, FnPredictor, PredictResult, Predictor};
