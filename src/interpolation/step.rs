//! Step-size estimation
//!
//! The central-difference formula assumes a constant spacing `h` between
//! consecutive x-values. Real sample sets only approximate that, so `h` is
//! always an explicit input, optionally produced by one of these rules:
//!
//! - [`StepRule::SpanOverCount`] : `(max x - min x) / n`
//! - [`StepRule::MeanSpacing`]   : mean of consecutive sorted differences
//! - [`StepRule::Fixed`]         : caller-supplied value
//!
//! `SpanOverCount` underestimates the true spacing by a factor `(n - 1) / n`
//! on evenly spaced data. It is kept as the default for compatibility with
//! plots built from it; use `MeanSpacing` for exact reproduction on uniform
//! grids.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::table::DifferenceTable;


fn span(x: &[f64]) -> f64 {
    let (lo, hi) = x
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    hi - lo
}

/// `(max x - min x) / n` over `x` in any order. `0.0` for fewer than two points.
pub fn span_over_count(x: &[f64]) -> f64 {
    if x.len() < 2 {
        return 0.0;
    }
    span(x) / x.len() as f64
}

/// Mean gap between consecutive values of `x` once sorted, i.e.
/// `(max x - min x) / (n - 1)`. Accepts `x` in any order and never returns
/// a negative value. `0.0` for fewer than two points.
pub fn mean_spacing(x: &[f64]) -> f64 {
    if x.len() < 2 {
        return 0.0;
    }
    span(x) / (x.len() - 1) as f64
}

/// Checks a step size for use as a divisor.
///
/// # Errors
/// - [`InterpolationError::DivisionByZero`] if `h == 0`.
/// - [`InterpolationError::InvalidStep`] if `h` is negative or non-finite.
pub fn validate_step(h: f64) -> Result<f64, InterpolationError> {
    if h == 0.0 {
        return Err(InterpolationError::DivisionByZero);
    }
    if !h.is_finite() || h < 0.0 {
        return Err(InterpolationError::InvalidStep { got: h });
    }
    Ok(h)
}


/// How a step size is obtained from a table.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepRule {
    #[default]
    SpanOverCount,
    MeanSpacing,
    Fixed(f64),
}

impl StepRule {
    /// Computes the raw step for `table`. Not validated; a single-sample
    /// table yields `0.0` for both estimators.
    pub fn resolve(self, table: &DifferenceTable) -> f64 {
        let h = match self {
            StepRule::SpanOverCount => span_over_count(table.x()),
            StepRule::MeanSpacing   => mean_spacing(table.x()),
            StepRule::Fixed(h)      => h,
        };
        tracing::trace!(target: "fdinterp::step", rule = ?self, h, "resolved step size");
        h
    }
}
