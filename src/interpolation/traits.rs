use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::table::DifferenceTable;

/// A polynomial evaluator over a built [`DifferenceTable`].
pub trait Interpolator {
    /// table the polynomial is read from
    fn table(&self) -> &DifferenceTable;

    /// evaluates single point
    /// defined separately in each method
    fn eval(&self, x: f64) -> Result<f64, InterpolationError>;

    /// evaluates many points
    #[inline]
    fn eval_many(&self, xs: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        xs.iter().map(|&xq| self.eval(xq)).collect()
    }

    /// evaluates many points into an [`InterpolationReport`],
    /// counting the ones outside the sample span
    fn eval_report(
        &self,
        algorithm: Algorithm,
        xs: &[f64],
    ) -> Result<InterpolationReport, InterpolationError> {
        let table = self.table();
        let mut report = InterpolationReport::new(algorithm, table.len(), xs.len());
        report.evaluated.reserve(xs.len());

        for &xq in xs {
            if !table.contains(xq) {
                report.n_extrapolated += 1;
                tracing::debug!(
                    target: "fdinterp::eval",
                    algorithm = algorithm.algorithm_name(),
                    x = xq,
                    x_min = table.x_min(),
                    x_max = table.x_max(),
                    "evaluating outside sample span"
                );
            }
            report.evaluated.push(self.eval(xq)?);
        }

        Ok(report)
    }
}
