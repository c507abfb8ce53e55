//! Shared configuration for interpolation algorithms.
//!
//! Provides [`CommonCfg`] with the default duplicate tolerance
//! [`DEFAULT_X_TOL`], relative to the x-span. Shared by all interpolation
//! algorithms.
//!
//! [`CommonCfg`] — universal fields
//! - `x`      : x values provided (any order)
//! - `y`      : y values provided, paired with `x` by position
//! - `x_eval` : x values to evaluate
//! - `x_min_spacing` : relative gap below which sorted x values are duplicates
//!
//! [`CommonCfg::new`] initializes configuration with empty slices.


use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x      : &'a [f64],
    pub(crate) y      : &'a [f64],
    pub(crate) x_eval : &'a [f64],
    pub(crate) x_min_spacing: f64,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x      : &[],
            y      : &[],
            x_eval : &[],
            x_min_spacing: DEFAULT_X_TOL,
        }
    }

    /// Checks that both sample vectors were provided and agree in length.
    pub fn validate(&self) -> Result<(), InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        Ok(())
    }

    /// Pairs `x` and `y` by position.
    pub fn samples(&self) -> Vec<(f64, f64)> {
        self.x.iter().copied().zip(self.y.iter().copied()).collect()
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self)  -> f64 { self.x_min_spacing }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a[f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a[f64]) { self.y = v; }
    pub(crate) fn with_x_eval(&mut self, v: &'a[f64]) { self.x_eval = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// Rejects empty or non-finite sample vectors.
pub(crate) fn check_samples(v: &[f64]) -> Result<(), InterpolationError> {
    if v.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if let Some(idx) = non_finite_idx(v) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    Ok(())
}

/// First adjacent pair of sorted `xs` whose gap is at most
/// `x_tol * (max x - min x)`.
///
/// The threshold scales with the data, so `[0, 1e-13]` is two distinct
/// points while `[0, 1e-13, 1]` holds a near-duplicate. Exact repeats are
/// always caught, including a sample set made of one repeated value.
pub(crate) fn find_duplicate(sorted: &[f64], x_tol: f64) -> Option<(f64, f64)> {
    let n = sorted.len();
    if n < 2 {
        return None;
    }
    let threshold = x_tol * (sorted[n - 1] - sorted[0]);
    sorted
        .windows(2)
        .find(|w| w[1] - w[0] <= threshold)
        .map(|w| (w[0], w[1]))
}

pub(crate) fn check_distinct(xs: &[f64], x_tol: f64) -> Result<(), InterpolationError> {
    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);
    match find_duplicate(&sorted, x_tol) {
        Some((x1, x2)) => Err(InterpolationError::DuplicateX { x1, x2 }),
        None           => Ok(()),
    }
}

pub(crate) fn check_lengths(x_len: usize, y_len: usize) -> Result<(), InterpolationError> {
    if x_len != 0 && y_len != 0 && x_len != y_len {
        return Err(InterpolationError::UnequalLength { x_len, y_len });
    }
    Ok(())
}

pub(crate) fn check_x_tol(v: f64) -> Result<f64, InterpolationError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(InterpolationError::InvalidXTol { got: v });
    }
    Ok(v)
}

/// Validating setters shared by every `*Cfg` holding a `common: CommonCfg`.
///
/// `set_x` rejects duplicates under the tolerance in effect when it is
/// called; table construction checks again with the final tolerance.
macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::config as cfg;

                cfg::check_samples(v)?;
                cfg::check_lengths(v.len(), self.common.y.len())?;
                cfg::check_distinct(v, self.common.x_min_spacing)?;
                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::config as cfg;

                cfg::check_samples(v)?;
                cfg::check_lengths(self.common.x.len(), v.len())?;
                self.common.with_y(v);
                Ok(self)
            }

            /// Query points; may be empty and need not lie in the sample span.
            pub fn set_x_eval(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }
                self.common.with_x_eval(v);
                Ok(self)
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                let v = $crate::interpolation::config::check_x_tol(v)?;
                self.common.with_x_min_spacing(v);
                Ok(self)
            }
        }
    };
}
pub(crate) use impl_common_cfg;
