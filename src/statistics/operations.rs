//! Reduction operations and the reduction trait
//!
//! This module defines the fundamental types and traits for collapsing a
//! grid stack into a summary grid.

use crate::ensemble::{GridStack, MaskedGrid};
use crate::errors::Result;

/// Supported cell-wise reductions across the stacked observations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReduceOperation {
    /// Arithmetic mean of the valid observations in each cell
    Mean,
    /// Fraction of observations strictly above the threshold in each cell
    Exceedance { threshold: f32 },
}

impl ReduceOperation {
    /// Get the string representation of the operation
    ///
    /// Doubles as the output variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Exceedance { .. } => "exceedance",
        }
    }

    /// The `units` attribute written for the summary variable
    #[must_use]
    pub const fn units(self) -> &'static str {
        match self {
            Self::Mean => "percentage",
            Self::Exceedance { .. } => "probability",
        }
    }

    /// The `long_name` attribute written for the summary variable
    #[must_use]
    pub const fn long_name(self) -> &'static str {
        match self {
            Self::Mean => "Cloud Fraction",
            Self::Exceedance { .. } => "Cloud Fraction Exceedance Probability",
        }
    }
}

/// Trait for types that can be reduced cell-wise to a summary grid
pub trait StackReduction {
    /// Collapse the leading axis into a single summary grid
    ///
    /// # Errors
    ///
    /// Returns an error if the reduced array cannot be assembled.
    fn reduce(&self, operation: ReduceOperation) -> Result<MaskedGrid>;
}

impl StackReduction for GridStack {
    fn reduce(&self, operation: ReduceOperation) -> Result<MaskedGrid> {
        match operation {
            ReduceOperation::Mean => super::parallel::parallel_masked_mean(self),
            ReduceOperation::Exceedance { threshold } => {
                super::parallel::parallel_exceedance(self, threshold)
            }
        }
    }
}
