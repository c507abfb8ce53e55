//! Defines the struct returned by all interpolation algorithms.
//!
//! This report summarizes the interpolation run: the algorithm used,
//! number of data and evaluation points, how many queries fell outside
//! the sample span, and the evaluated values.

use crate::interpolation::algorithms::Algorithm;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : name of the interpolation method
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `n_extrapolated` : evaluation points outside `[min x, max x]`
/// - `evaluated`      : interpolated values at each evaluation point
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub n_extrapolated: usize,
    pub evaluated: Vec<f64>,
}

impl InterpolationReport {
    pub fn new(algorithm: Algorithm, n_provided: usize, n_evaluated: usize) -> Self {
        Self {
            algorithm_name: algorithm.algorithm_name(),
            n_provided,
            n_evaluated,
            n_extrapolated: 0,
            evaluated: Vec::new(),
        }
    }
}
