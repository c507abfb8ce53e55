//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

/// Interpolation algorithm variants.
/// - [`Algorithm::Newton`] Newton forward-difference formula
/// - [`Algorithm::Gauss`]  Gauss central-difference formula
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Newton,
    Gauss,
}

impl Algorithm {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Newton => "newton forward difference",
            Algorithm::Gauss  => "gauss central difference",
        }
    }
}
