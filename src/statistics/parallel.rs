//! Parallel computation implementations for the stack reductions
//!
//! Both reductions are cell-independent, so the output cells are computed
//! with a parallel iterator over the flattened (row, col) index space.

use crate::ensemble::{GridStack, MaskedGrid};
use crate::errors::Result;
use ndarray::Array2;
use rayon::prelude::*;

/// Computes the per-cell mean across the stack using parallel processing
///
/// Accumulates in f64 to avoid precision loss. Masked observations are
/// excluded from a cell's average; a cell masked in every grid stays
/// masked in the result.
///
/// # Errors
///
/// Returns an error if the result array cannot be assembled.
pub fn parallel_masked_mean(stack: &GridStack) -> Result<MaskedGrid> {
    let (rows, cols) = stack.grid_dim();
    let n = stack.len();
    let data = stack.data();
    let mask = stack.mask();

    let cells: Vec<(f32, bool)> = (0..rows * cols)
        .into_par_iter()
        .map(|flat_idx| {
            let row = flat_idx / cols;
            let col = flat_idx % cols;

            let mut sum = 0.0_f64;
            let mut count = 0_u32;
            for i in 0..n {
                if !mask[[i, row, col]] {
                    sum += f64::from(data[[i, row, col]]);
                    count += 1;
                }
            }

            if count > 0 {
                #[allow(clippy::cast_possible_truncation)]
                {
                    ((sum / f64::from(count)) as f32, false)
                }
            } else {
                // every observation missing for this cell
                (0.0, true)
            }
        })
        .collect();

    let mut values = Vec::with_capacity(cells.len());
    let mut masked = Vec::with_capacity(cells.len());
    for (value, is_masked) in cells {
        values.push(value);
        masked.push(is_masked);
    }

    let mean = Array2::from_shape_vec((rows, cols), values)?;
    let mask = Array2::from_shape_vec((rows, cols), masked)?;
    MaskedGrid::new(mean, mask)
}

/// Computes the per-cell exceedance probability across the stack
///
/// Counts observations strictly greater than `threshold` and divides by
/// the total number of stacked grids. Masked observations never count as
/// exceeding but still count toward the denominator, so cells with missing
/// observations are biased low. The result carries no mask.
///
/// # Errors
///
/// Returns an error if the result array cannot be assembled.
pub fn parallel_exceedance(stack: &GridStack, threshold: f32) -> Result<MaskedGrid> {
    let (rows, cols) = stack.grid_dim();
    let n = stack.len();
    let data = stack.data();
    let mask = stack.mask();

    let values: Vec<f32> = (0..rows * cols)
        .into_par_iter()
        .map(|flat_idx| {
            let row = flat_idx / cols;
            let col = flat_idx % cols;

            let mut exceeding = 0_u32;
            for i in 0..n {
                if !mask[[i, row, col]] && data[[i, row, col]] > threshold {
                    exceeding += 1;
                }
            }

            #[allow(clippy::cast_precision_loss)]
            {
                exceeding as f32 / n as f32
            }
        })
        .collect();

    let probability = Array2::from_shape_vec((rows, cols), values)?;
    let mask = Array2::from_elem((rows, cols), false);
    MaskedGrid::new(probability, mask)
}
