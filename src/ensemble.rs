//! Grid and grid-stack types for the observation ensemble
//!
//! An observation file yields a [`MaskedGrid`]: the raw values plus an
//! explicit boolean mask marking cells with no valid data. The mask is the
//! single source of truth for missingness in memory; the numeric fill value
//! only appears at the file boundary when reading and writing NetCDF.

use crate::errors::{NimbostatError, Result};
use ndarray::{Array2, Array3, Axis};
use std::path::PathBuf;

/// Latitude bins of the 1-degree global grid
pub const GRID_LAT: usize = 180;

/// Longitude bins of the 1-degree global grid
pub const GRID_LON: usize = 360;

/// Sentinel written to the output file for cells with no valid data
pub const FILL_VALUE: f32 = -9999.0;

/// A 2-D observation grid with an explicit missing-data mask
///
/// `true` in the mask means "no valid data" for that cell.
#[derive(Debug, Clone)]
pub struct MaskedGrid {
    data: Array2<f32>,
    mask: Array2<bool>,
}

impl MaskedGrid {
    /// Create a grid from data and mask arrays of matching shape
    ///
    /// # Errors
    ///
    /// Returns an error if the data and mask shapes disagree.
    pub fn new(data: Array2<f32>, mask: Array2<bool>) -> Result<Self> {
        if data.dim() != mask.dim() {
            return Err(NimbostatError::Generic(format!(
                "data shape {:?} does not match mask shape {:?}",
                data.dim(),
                mask.dim()
            )));
        }
        Ok(Self { data, mask })
    }

    /// Build a grid from raw file values, masking cells equal to the fill
    /// value and cells that are not finite
    #[must_use]
    pub fn from_raw(data: Array2<f32>, fill_value: f32) -> Self {
        let mask = data.mapv(|v| !v.is_finite() || v == fill_value);
        Self { data, mask }
    }

    /// Shape of the grid as (rows, cols)
    #[must_use]
    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// The raw data array
    #[must_use]
    pub fn data(&self) -> &Array2<f32> {
        &self.data
    }

    /// The missing-data mask
    #[must_use]
    pub fn mask(&self) -> &Array2<bool> {
        &self.mask
    }

    /// Whether the cell at (row, col) holds no valid data
    #[must_use]
    pub fn is_masked(&self, row: usize, col: usize) -> bool {
        self.mask[[row, col]]
    }

    /// The value at (row, col), or `None` if the cell is masked
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if self.mask[[row, col]] {
            None
        } else {
            Some(self.data[[row, col]])
        }
    }

    /// Number of cells holding valid data
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.mask.iter().filter(|&&m| !m).count()
    }

    /// The data with masked cells replaced by `fill_value`
    #[must_use]
    pub fn to_filled(&self, fill_value: f32) -> Array2<f32> {
        let mut filled = self.data.clone();
        filled.zip_mut_with(&self.mask, |v, &m| {
            if m {
                *v = fill_value;
            }
        });
        filled
    }
}

/// N same-shaped observation grids stacked along a new leading axis
///
/// Shape is (N, rows, cols). Construction validates that every grid shares
/// the first grid's shape and fails with the offending file's name.
#[derive(Debug)]
pub struct GridStack {
    data: Array3<f32>,
    mask: Array3<bool>,
}

impl GridStack {
    /// Stack grids along a new leading axis
    ///
    /// # Errors
    ///
    /// Returns [`NimbostatError::EmptyStack`] for an empty input set and
    /// [`NimbostatError::ShapeMismatch`] naming the first file whose grid
    /// disagrees with the others.
    pub fn from_grids(grids: Vec<(PathBuf, MaskedGrid)>) -> Result<Self> {
        let (rows, cols) = grids
            .first()
            .ok_or(NimbostatError::EmptyStack)?
            .1
            .dim();

        for (path, grid) in &grids {
            if grid.dim() != (rows, cols) {
                return Err(NimbostatError::ShapeMismatch {
                    file: path.clone(),
                    expected: (rows, cols),
                    found: vec![grid.dim().0, grid.dim().1],
                });
            }
        }

        let n = grids.len();
        let mut data = Array3::zeros((n, rows, cols));
        let mut mask = Array3::from_elem((n, rows, cols), false);
        for (i, (_, grid)) in grids.iter().enumerate() {
            data.index_axis_mut(Axis(0), i).assign(grid.data());
            mask.index_axis_mut(Axis(0), i).assign(grid.mask());
        }

        Ok(Self { data, mask })
    }

    /// Number of stacked grids
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.dim().0
    }

    /// Whether the stack holds no grids
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shape of one member grid as (rows, cols)
    #[must_use]
    pub fn grid_dim(&self) -> (usize, usize) {
        let (_, rows, cols) = self.data.dim();
        (rows, cols)
    }

    /// The stacked data, shape (N, rows, cols)
    #[must_use]
    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }

    /// The stacked missing-data masks, shape (N, rows, cols)
    #[must_use]
    pub fn mask(&self) -> &Array3<bool> {
        &self.mask
    }
}
