//! Finite-difference interpolation.
//!
//! Builds a forward-difference table once from a set of `(x, y)` samples and
//! evaluates the Newton forward-difference or Gauss central-difference
//! polynomial against it at any number of query points.

pub mod interpolation;

pub use interpolation::errors::{ErrorKind, InterpolationError};
pub use interpolation::gauss::{gauss_eval, GaussEvaluator};
pub use interpolation::newton::{newton_eval, NewtonEvaluator};
pub use interpolation::step::StepRule;
pub use interpolation::table::{build_table, DifferenceTable, TableSamples};
pub use interpolation::Interpolator;
