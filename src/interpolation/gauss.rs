//! Gauss Central-Difference Interpolation
//!
//! Implements the Gauss forward
//! [central-difference formula](https://en.wikipedia.org/wiki/Finite_difference#Newton's_series)
//! around a center row `c` of a [`DifferenceTable`].
//!
//! With `u = (t - x[c]) / h`, term `k` reads the difference of order `k` from
//! row `c - floor(k / 2)`, zig-zagging down the table:
//!
//! ```text
//! P(t) = y_c + u Δy_c + u(u-1)/2! Δ²y_{c-1} + (u+1)u(u-1)/3! Δ³y_{c-1}
//!            + (u+1)u(u-1)(u-2)/4! Δ⁴y_{c-2} + ...
//! ```
//!
//! Each coefficient is the previous one times `u - floor(k/2)` (even `k`) or
//! `u + floor(k/2)` (odd `k`), divided by `k`. The walk stops at the first
//! cell outside the triangle; from the default center `(n - 1) / 2` every
//! order is reached.


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::step::{validate_step, StepRule};
use crate::interpolation::table::DifferenceTable;
use crate::interpolation::traits::Interpolator;


/// Gauss interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
/// - `step`   : [`StepRule`] producing `h`
/// - `center` : explicit center row, `None` for the table middle
///
/// # Construction
/// - Use [`GaussCfg::new`] then optional setters.
///
/// # Defaults
/// - `step` is [`StepRule::SpanOverCount`]. A single sample therefore
///   resolves to `h = 0` and fails with [`InterpolationError::DivisionByZero`]
///   unless a step is set.
#[derive(Debug, Clone, Copy)]
pub struct GaussCfg<'a> {
    common: CommonCfg<'a>,
    step: StepRule,
    center: Option<usize>,
}
impl<'a> GaussCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), step: StepRule::default(), center: None }
    }

    pub fn set_step(self, h: f64) -> Result<Self, InterpolationError> {
        self.set_step_rule(StepRule::Fixed(h))
    }

    pub fn set_step_rule(mut self, rule: StepRule) -> Result<Self, InterpolationError> {
        if let StepRule::Fixed(h) = rule {
            validate_step(h)?;
        }
        self.step = rule;
        Ok(self)
    }

    pub fn set_center(mut self, c: usize) -> Result<Self, InterpolationError> {
        let n = self.common.x().len();
        if n != 0 && c >= n {
            return Err(InterpolationError::CenterOutOfRange { center: c, n });
        }
        self.center = Some(c);
        Ok(self)
    }

    pub fn step_rule(&self) -> StepRule { self.step }
    pub fn center(&self) -> Option<usize> { self.center }
}
impl_common_cfg!(GaussCfg<'a>);


/// Gauss central-difference evaluator borrowing a built table.
#[derive(Debug, Clone, Copy)]
pub struct GaussEvaluator<'t> {
    table: &'t DifferenceTable,
    h: f64,
    center: usize,
    xc: f64,
}

impl<'t> GaussEvaluator<'t> {
    /// Centers on [`DifferenceTable::center_index`].
    ///
    /// # Errors
    /// - [`InterpolationError::DivisionByZero`] if `h == 0`.
    /// - [`InterpolationError::InvalidStep`] if `h` is negative or non-finite.
    pub fn new(table: &'t DifferenceTable, h: f64) -> Result<Self, InterpolationError> {
        Self::with_center(table, h, table.center_index())
    }

    /// Centers on row `center`.
    ///
    /// # Errors
    /// As [`GaussEvaluator::new`], plus
    /// [`InterpolationError::CenterOutOfRange`] if `center >= n`.
    pub fn with_center(
        table: &'t DifferenceTable,
        h: f64,
        center: usize,
    ) -> Result<Self, InterpolationError> {
        let h = validate_step(h)?;
        let n = table.len();
        if center >= n {
            return Err(InterpolationError::CenterOutOfRange { center, n });
        }
        Ok(Self { table, h, center, xc: table.x()[center] })
    }

    #[inline]
    pub fn step(&self) -> f64 { self.h }

    #[inline]
    pub fn center(&self) -> usize { self.center }

    #[inline]
    pub fn table(&self) -> &'t DifferenceTable { self.table }

    /// Evaluates the central-difference polynomial at `t`.
    pub fn evaluate(&self, t: f64) -> f64 {
        let c = self.center;
        let u = (t - self.xc) / self.h;

        let mut result = self.table.row(c)[0];
        let mut term = 1.0;
        for k in 1..self.table.len() {
            let half = k / 2;
            if half > c {
                break;
            }
            let Some(d) = self.table.get(c - half, k) else { break };

            let shift = half as f64;
            let factor = if k % 2 == 0 { u - shift } else { u + shift };
            term *= factor / k as f64;
            result += term * d;
        }
        result
    }
}

impl Interpolator for GaussEvaluator<'_> {
    #[inline]
    fn table(&self) -> &DifferenceTable { self.table }

    #[inline]
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        Ok(self.evaluate(x))
    }
}


/// Evaluates the Gauss central-difference polynomial of `table` at `x`,
/// centered on the table middle, with step `h`.
///
/// # Errors
/// [`InterpolationError::DivisionByZero`] if `h == 0`.
pub fn gauss_eval(table: &DifferenceTable, h: f64, x: f64) -> Result<f64, InterpolationError> {
    Ok(GaussEvaluator::new(table, h)?.evaluate(x))
}


/// Performs Gauss central-difference interpolation.
///
/// # Behavior
/// - Sorts the samples and builds the [`DifferenceTable`].
/// - Resolves `h` from the configured [`StepRule`] and the center row.
/// - Evaluates every point in `cfg.common.x_eval()`. Points outside the
///   sample span are evaluated anyway and counted in `n_extrapolated`.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"gauss central difference"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `n_extrapolated` : evaluation points outside the sample span
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::DivisionByZero`] if the resolved step is zero.
/// - [`InterpolationError::CenterOutOfRange`] if the center is past the table.
/// - Sample validation errors as for [`DifferenceTable::with_x_tol`].
pub fn interpolate(cfg: GaussCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let table = DifferenceTable::with_x_tol(&cfg.common.samples(), cfg.common.x_min_spacing())?;
    let h = cfg.step.resolve(&table);
    let center = cfg.center.unwrap_or_else(|| table.center_index());
    let evaluator = GaussEvaluator::with_center(&table, h, center)?;

    evaluator.eval_report(Algorithm::Gauss, cfg.common.x_eval())
}
