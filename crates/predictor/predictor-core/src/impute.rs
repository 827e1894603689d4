//! Gap filling for hourly features.

use crate::features::{HourlyFeatures, SUNSPOT_FEATURE};

/// Fill missing cells: the sunspot column forward, every other column by
/// linear interpolation.
pub fn impute(features: &mut HourlyFeatures) {
    let ssn = features.column_index(SUNSPOT_FEATURE);
    for idx in 0..features.columns.len() {
        let mut values = features.column(idx);
        if Some(idx) == ssn {
            forward_fill(&mut values);
        } else {
            interpolate_linear(&mut values);
        }
        features.set_column(idx, &values);
    }
}

/// Replace each NaN with the last value before it.
pub fn forward_fill(values: &mut [f64]) {
    let mut last = None;
    for v in values.iter_mut() {
        match (v.is_nan(), last) {
            (true, Some(prev)) => *v = prev,
            (false, _) => last = Some(*v),
            (true, None) => {}
        }
    }
}

/// Linear interpolation over positions.
///
/// Interior gaps are interpolated between their neighbours, trailing gaps
/// repeat the last value and leading gaps stay NaN.
pub fn interpolate_linear(values: &mut [f64]) {
    let mut prev: Option<usize> = None;
    for i in 0..values.len() {
        if values[i].is_nan() {
            continue;
        }
        if let Some(p) = prev {
            let gap = i - p;
            if gap > 1 {
                let (a, b) = (values[p], values[i]);
                for k in 1..gap {
                    values[p + k] = a + (b - a) * k as f64 / gap as f64;
                }
            }
        }
        prev = Some(i);
    }
    if let Some(p) = prev {
        let last = values[p];
        for v in &mut values[p + 1..] {
            *v = last;
        }
    }
}
