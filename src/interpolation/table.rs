//! Forward-difference table
//!
//! Sorts a sample set by `x` and builds the triangular grid of successive
//! [finite differences](https://en.wikipedia.org/wiki/Finite_difference)
//! of `y`:
//!
//! ```text
//! diff[i][0] = y[i]
//! diff[i][j] = diff[i + 1][j - 1] - diff[i][j - 1]      for i + j < n
//! ```
//!
//! Cells with `i + j >= n` do not exist. They are reported as `None`,
//! never as zero. A built table is immutable and can be shared between
//! threads and evaluators freely.
//!
//! With the `serde` feature a table is stored as its [`TableSamples`] and
//! rebuilt through [`DifferenceTable::from_xy`] on load, so a deserialized
//! table passes the same checks as a constructed one.

use std::fmt;

use crate::interpolation::config::{check_x_tol, find_duplicate, non_finite_idx, DEFAULT_X_TOL};
use crate::interpolation::errors::InterpolationError;


/// Sorted samples together with their forward-difference grid.
///
/// Row `i` holds `n - i` entries: `rows[i][j]` is the `j`-th forward
/// difference starting at sample `i`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TableSamples", into = "TableSamples"))]
pub struct DifferenceTable {
    x: Vec<f64>,
    rows: Vec<Vec<f64>>,
}

impl DifferenceTable {
    /// Builds a table from `(x, y)` pairs in any order.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if `samples` is empty.
    /// - [`InterpolationError::NonFiniteVec`] if any coordinate is NaN or infinite.
    /// - [`InterpolationError::DuplicateX`] if two sorted x-values are
    ///   within `DEFAULT_X_TOL * (max x - min x)` of each other. Distinct
    ///   values on any scale are accepted; only gaps that vanish relative to
    ///   the span are treated as repeats.
    pub fn new(samples: &[(f64, f64)]) -> Result<Self, InterpolationError> {
        Self::with_x_tol(samples, DEFAULT_X_TOL)
    }

    /// Same as [`DifferenceTable::new`] with a caller-chosen relative
    /// duplicate tolerance.
    pub fn with_x_tol(samples: &[(f64, f64)], x_tol: f64) -> Result<Self, InterpolationError> {
        if samples.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        check_x_tol(x_tol)?;
        if let Some(idx) = samples.iter().position(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        // stable, so equal x keep caller order until rejected below
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let n = sorted.len();
        let x: Vec<f64> = sorted.iter().map(|&(xi, _)| xi).collect();
        if let Some((x1, x2)) = find_duplicate(&x, x_tol) {
            return Err(InterpolationError::DuplicateX { x1, x2 });
        }

        let mut rows: Vec<Vec<f64>> = sorted
            .iter()
            .enumerate()
            .map(|(i, &(_, yi))| {
                let mut row = Vec::with_capacity(n - i);
                row.push(yi);
                row
            })
            .collect();

        for j in 1..n {
            for i in 0..n - j {
                let d = rows[i + 1][j - 1] - rows[i][j - 1];
                rows[i].push(d);
            }
        }

        tracing::debug!(
            target: "fdinterp::table",
            n,
            x_min = x[0],
            x_max = x[n - 1],
            "built difference table"
        );

        Ok(Self { x, rows })
    }

    /// Builds a table from parallel `x` / `y` slices.
    pub fn from_xy(x: &[f64], y: &[f64]) -> Result<Self, InterpolationError> {
        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if let Some(idx) = non_finite_idx(x).or_else(|| non_finite_idx(y)) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        let samples: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
        Self::new(&samples)
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize { self.x.len() }

    /// Always `false`; construction rejects empty sample sets.
    #[inline]
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Highest difference order stored (`n - 1`).
    #[inline]
    pub fn order(&self) -> usize { self.len() - 1 }

    /// Sorted x-values.
    #[inline]
    pub fn x(&self) -> &[f64] { &self.x }

    /// y-values in sorted-x order (column 0).
    pub fn y(&self) -> Vec<f64> { self.column(0) }

    #[inline]
    pub fn x_min(&self) -> f64 { self.x[0] }

    #[inline]
    pub fn x_max(&self) -> f64 { self.x[self.len() - 1] }

    /// Whether `xq` lies inside the sample span `[x_min, x_max]`.
    #[inline]
    pub fn contains(&self, xq: f64) -> bool {
        xq >= self.x_min() && xq <= self.x_max()
    }

    /// Index of the structural middle row, `(n - 1) / 2`.
    ///
    /// From this row the Gauss zig-zag reaches every difference order
    /// without leaving the triangle.
    #[inline]
    pub fn center_index(&self) -> usize { (self.len() - 1) / 2 }

    /// Cell `(i, j)`, or `None` when `i + j >= n`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.rows.get(i).and_then(|row| row.get(j)).copied()
    }

    /// All defined cells of row `i`: `diff[i][0..n - i]`.
    ///
    /// # Panics
    /// If `i >= n`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] { &self.rows[i] }

    /// All defined cells of column `j`: `diff[0..n - j][j]`. Empty if `j >= n`.
    pub fn column(&self, j: usize) -> Vec<f64> {
        self.rows.iter().filter_map(|row| row.get(j).copied()).collect()
    }

    /// The full `n x n` grid with undefined cells as `None`.
    pub fn padded_rows(&self) -> Vec<Vec<Option<f64>>> {
        let n = self.len();
        self.rows
            .iter()
            .map(|row| (0..n).map(|j| row.get(j).copied()).collect())
            .collect()
    }
}


impl fmt::Display for DifferenceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.len();
        let prec = f.precision().unwrap_or(6);
        let width = prec + 8;

        write!(f, "{:>width$}", "x")?;
        write!(f, " {:>width$}", "y")?;
        for j in 1..n {
            write!(f, " {:>width$}", format!("d{j}"))?;
        }
        writeln!(f)?;

        for (xi, row) in self.x.iter().zip(&self.rows) {
            write!(f, "{:>width$.prec$}", xi)?;
            for j in 0..n {
                match row.get(j) {
                    Some(v) => write!(f, " {:>width$.prec$}", v)?,
                    None    => write!(f, " {:>width$}", "")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}


/// Sorted samples a [`DifferenceTable`] is built from; its serialized form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSamples {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl From<DifferenceTable> for TableSamples {
    fn from(table: DifferenceTable) -> Self {
        let y = table.y();
        Self { x: table.x, y }
    }
}

impl TryFrom<TableSamples> for DifferenceTable {
    type Error = InterpolationError;

    fn try_from(samples: TableSamples) -> Result<Self, Self::Error> {
        DifferenceTable::from_xy(&samples.x, &samples.y)
    }
}


/// Builds a [`DifferenceTable`] from `(x, y)` samples.
///
/// See [`DifferenceTable::new`].
pub fn build_table(samples: &[(f64, f64)]) -> Result<DifferenceTable, InterpolationError> {
    DifferenceTable::new(samples)
}
