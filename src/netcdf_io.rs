//! NetCDF I/O operations: observation extraction and summary serialization
//!
//! This module reads the observation variable from input files as masked
//! grids and writes the reduced summary to a new NetCDF file with the
//! global 1-degree coordinate variables and metadata attributes.

use crate::ensemble::{MaskedGrid, FILL_VALUE, GRID_LAT, GRID_LON};
use crate::errors::{NimbostatError, Result};
use crate::statistics::ReduceOperation;
use chrono::Utc;
use ndarray::{Array1, Array2};
use netcdf::{create, open, AttributeValue};
use std::{fs, path::Path};

/// Observation field aggregated by default (MODIS MOD08 daily cloud fraction)
pub const OBSERVATION_VARIABLE: &str = "MOD08_D3_6_1_Cloud_Fraction_Day_Mean";

/// Latitude bin centers of the global grid, -90 to 89 inclusive
#[must_use]
pub fn latitude_centers() -> Array1<f32> {
    Array1::from_iter((0..GRID_LAT).map(|i| -90.0 + i as f32))
}

/// Longitude bin centers of the global grid, -180 to 179 inclusive
#[must_use]
pub fn longitude_centers() -> Array1<f32> {
    Array1::from_iter((0..GRID_LON).map(|i| -180.0 + i as f32))
}

/// Reads the observation variable from one input file as a masked grid
///
/// The file handle is scoped to this function and released before
/// returning. Cells equal to the variable's `_FillValue` attribute (or
/// [`FILL_VALUE`] when the attribute is absent) and non-finite cells are
/// masked. The grid shape is validated against the expected global grid.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, the variable is absent,
/// or the grid is not 180 x 360, in each case naming the file.
pub fn read_observation_grid(path: &Path, var_name: &str) -> Result<MaskedGrid> {
    let file = open(path)?;

    let var = file
        .variable(var_name)
        .ok_or_else(|| NimbostatError::VariableNotFound {
            file: path.to_path_buf(),
            var: var_name.to_string(),
        })?;

    let shape: Vec<usize> = var
        .dimensions()
        .iter()
        .map(netcdf::Dimension::len)
        .collect();
    if shape != [GRID_LAT, GRID_LON] {
        return Err(NimbostatError::ShapeMismatch {
            file: path.to_path_buf(),
            expected: (GRID_LAT, GRID_LON),
            found: shape,
        });
    }

    let fill_value = var
        .attribute("_FillValue")
        .and_then(|attr| match attr.value().ok()? {
            AttributeValue::Float(v) => Some(v),
            AttributeValue::Double(v) => Some(v as f32),
            AttributeValue::Short(v) => Some(f32::from(v)),
            _ => None,
        })
        .unwrap_or(FILL_VALUE);

    let values = var.get_values::<f32, _>(..)?;
    let data = Array2::from_shape_vec((GRID_LAT, GRID_LON), values)?;

    Ok(MaskedGrid::from_raw(data, fill_value))
}

/// Writer for the summary NetCDF artifact
pub struct GridWriter<'a> {
    output_path: &'a Path,
}

impl<'a> GridWriter<'a> {
    /// Create a new writer targeting `output_path`
    #[must_use]
    pub fn new(output_path: &'a Path) -> Self {
        Self { output_path }
    }

    /// Write the summary grid together with the coordinate variables
    ///
    /// An existing file at the output path is removed first. Masked cells
    /// are written as [`FILL_VALUE`], which is also declared as the summary
    /// variable's `_FillValue` attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is not 180 x 360 or any file operation
    /// fails.
    pub fn write_summary(&self, grid: &MaskedGrid, operation: ReduceOperation) -> Result<()> {
        let (rows, cols) = grid.dim();
        if (rows, cols) != (GRID_LAT, GRID_LON) {
            return Err(NimbostatError::ShapeMismatch {
                file: self.output_path.to_path_buf(),
                expected: (GRID_LAT, GRID_LON),
                found: vec![rows, cols],
            });
        }

        if self.output_path.exists() {
            fs::remove_file(self.output_path)?;
        }

        let mut file = create(self.output_path)?;

        // Record dimension declared but carried by no variable
        file.add_unlimited_dimension("time")?;
        file.add_dimension("lat", GRID_LAT)?;
        file.add_dimension("lon", GRID_LON)?;

        {
            let mut summary = file.add_variable::<f32>(operation.as_str(), &["lat", "lon"])?;
            summary.put_attribute("_FillValue", FILL_VALUE)?;
            summary.put_attribute("units", operation.units())?;
            summary.put_attribute("long_name", operation.long_name())?;
            summary.put(grid.to_filled(FILL_VALUE).view(), ..)?;
        }

        {
            let mut lat = file.add_variable::<f32>("lat", &["lat"])?;
            lat.put_attribute("units", "degrees_north")?;
            lat.put_attribute("long_name", "latitude")?;
            lat.put(latitude_centers().view(), ..)?;
        }

        {
            let mut lon = file.add_variable::<f32>("lon", &["lon"])?;
            lon.put_attribute("units", "degrees_east")?;
            lon.put_attribute("long_name", "longitude")?;
            lon.put(longitude_centers().view(), ..)?;
        }

        file.add_attribute(
            "history",
            format!("Created by nimbostat on {}", Utc::now().to_rfc3339()),
        )?;

        Ok(())
    }
}
