//! Predictor contract.

use std::error::Error;

use crate::model::FeatureWindow;

/// Result type for predictor calls
pub type PredictResult<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// External forecaster evaluated by the harness.
///
/// Receives only data available at decision time `t0` and returns forecasts
/// for `(t0, t0 + 1h)`. Values are expected in `[-2000, 500]` but are not
/// required to be valid; the runner validates them.
pub trait Predictor {
    /// Predictor name, used in logs.
    fn name(&self) -> &str {
        "predictor"
    }

    /// Forecast `(t0, t1)` from the window.
    fn predict(&self, window: &FeatureWindow<'_>) -> PredictResult<(f64, f64)>;
}

impl<P: Predictor + ?Sized> Predictor for &P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn predict(&self, window: &FeatureWindow<'_>) -> PredictResult<(f64, f64)> {
        (**self).predict(window)
    }
}

impl<P: Predictor + ?Sized> Predictor for Box<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn predict(&self, window: &FeatureWindow<'_>) -> PredictResult<(f64, f64)> {
        (**self).predict(window)
    }
}

/// Predictor backed by a closure, see [`fn_predictor`].
pub struct FnPredictor<F> {
    name: String,
    f: F,
}

/// Wrap a closure as a [`Predictor`].
pub fn fn_predictor<F>(name: &str, f: F) -> FnPredictor<F>
where
    F: Fn(&FeatureWindow<'_>) -> PredictResult<(f64, f64)>,
{
    FnPredictor {
        name: name.to_string(),
        f,
    }
}

impl<F> Predictor for FnPredictor<F>
where
    F: Fn(&FeatureWindow<'_>) -> PredictResult<(f64, f64)>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, window: &FeatureWindow<'_>) -> PredictResult<(f64, f64)> {
        (self.f)(window)
    }
}
