//! Newton Forward-Difference Interpolation
//!
//! Implements the
//! [Newton forward-difference formula](https://en.wikipedia.org/wiki/Newton_polynomial#Newton_forward_divided_difference_formula)
//! over the first row of a [`DifferenceTable`].
//!
//! With `u = (t - x[0]) / h`,
//!
//! ```text
//! P(t) = Δ⁰y₀ + u Δ¹y₀ + u(u-1)/2! Δ²y₀ + ... + u(u-1)...(u-n+2)/(n-1)! Δⁿ⁻¹y₀
//! ```
//!
//! The binomial coefficient of each term is built from the previous one, so
//! no factorial is ever formed. `h` defaults to the first sorted interval
//! `x[1] - x[0]`.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::step::validate_step;
use crate::interpolation::table::DifferenceTable;
use crate::interpolation::traits::Interpolator;


/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
/// - `step`   : explicit step size, `None` for the first sorted interval
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
#[derive(Debug, Clone, Copy)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
    step: Option<f64>,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), step: None }
    }

    pub fn set_step(mut self, h: f64) -> Result<Self, InterpolationError> {
        self.step = Some(validate_step(h)?);
        Ok(self)
    }

    pub fn step(&self) -> Option<f64> { self.step }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Newton forward-difference evaluator borrowing a built table.
#[derive(Debug, Clone, Copy)]
pub struct NewtonEvaluator<'t> {
    table: &'t DifferenceTable,
    x0: f64,
    h: f64,
}

impl<'t> NewtonEvaluator<'t> {
    /// Uses the first sorted interval as the step.
    pub fn new(table: &'t DifferenceTable) -> Self {
        let x = table.x();
        // unused for a single sample
        let h = if x.len() > 1 { x[1] - x[0] } else { 1.0 };
        Self { table, x0: x[0], h }
    }

    /// Uses `h` as the step.
    ///
    /// # Errors
    /// See [`validate_step`].
    pub fn with_step(table: &'t DifferenceTable, h: f64) -> Result<Self, InterpolationError> {
        let h = validate_step(h)?;
        Ok(Self { table, x0: table.x()[0], h })
    }

    #[inline]
    pub fn step(&self) -> f64 { self.h }

    #[inline]
    pub fn table(&self) -> &'t DifferenceTable { self.table }

    /// Evaluates the forward-difference polynomial at `t`.
    ///
    /// Defined on the whole real line. Accuracy outside the sample span is
    /// not guaranteed.
    pub fn evaluate(&self, t: f64) -> f64 {
        let row = self.table.row(0);
        let mut result = row[0];
        if row.len() == 1 {
            return result;
        }

        let u = (t - self.x0) / self.h;
        let mut term = 1.0;
        for (j, &d) in row.iter().enumerate().skip(1) {
            term *= (u - (j - 1) as f64) / j as f64;
            result += term * d;
        }
        result
    }
}

impl Interpolator for NewtonEvaluator<'_> {
    #[inline]
    fn table(&self) -> &DifferenceTable { self.table }

    #[inline]
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        Ok(self.evaluate(x))
    }
}


/// Evaluates the Newton forward-difference polynomial of `table` at `x`.
pub fn newton_eval(table: &DifferenceTable, x: f64) -> f64 {
    NewtonEvaluator::new(table).evaluate(x)
}


/// Performs Newton forward-difference interpolation.
///
/// # Behavior
/// - Sorts the samples and builds the [`DifferenceTable`].
/// - Evaluates the forward-difference polynomial at every point in
///   `cfg.common.x_eval()`. Points outside the sample span are evaluated
///   anyway and counted in `n_extrapolated`.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton forward difference"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `n_extrapolated` : evaluation points outside the sample span
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] / [`InterpolationError::UnequalLength`]
///   if `x` and `y` were not both set.
/// - [`InterpolationError::DuplicateX`] if two x-values coincide.
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let table = DifferenceTable::with_x_tol(&cfg.common.samples(), cfg.common.x_min_spacing())?;
    let evaluator = match cfg.step {
        Some(h) => NewtonEvaluator::with_step(&table, h)?,
        None    => NewtonEvaluator::new(&table),
    };

    evaluator.eval_report(Algorithm::Newton, cfg.common.x_eval())
}
