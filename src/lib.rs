//! Nimbostat: gridded satellite observation aggregation
//!
//! A Rust library and CLI for aggregating a collection of same-shaped
//! gridded satellite observation files (MODIS MOD08 daily cloud-fraction
//! grids in NetCDF) into summary statistics and writing the result as a
//! new NetCDF file with global 1-degree coordinate metadata.
//!
//! ## Key Features
//!
//! - **Masked Statistics**: Per-cell mean and exceedance probability with
//!   explicit missing-data tracking
//! - **Parallel Processing**: Cell-wise reduction using Rayon
//! - **Fail-Fast Validation**: Grid shape and variable presence checked per
//!   input file, with the file name in every error
//! - **Self-Describing Output**: Coordinate variables and units/long_name
//!   attributes written alongside the summary field
//!
//! ## Module Organization
//!
//! - [`discovery`]: Input file enumeration by glob pattern
//! - [`ensemble`]: Masked grid and grid-stack types
//! - [`statistics`]: Cell-wise reductions over the stack
//! - [`netcdf_io`]: NetCDF extraction and summary serialization
//! - [`metadata`]: Grid summaries and output-file inspection
//! - [`parallel`]: Parallel processing configuration
//! - [`errors`]: Centralized error handling
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use nimbostat::prelude::*;
//! use nimbostat::{discover_inputs, read_observation_grid, GridStack, GridWriter, OBSERVATION_VARIABLE};
//! use std::path::Path;
//!
//! let paths = discover_inputs("scrub*.nc").unwrap();
//! let grids = paths
//!     .into_iter()
//!     .map(|p| read_observation_grid(&p, OBSERVATION_VARIABLE).map(|g| (p, g)))
//!     .collect::<Result<Vec<_>>>()
//!     .unwrap();
//! let stack = GridStack::from_grids(grids).unwrap();
//! let mean = stack.reduce(ReduceOperation::Mean).unwrap();
//! GridWriter::new(Path::new("new_netcdf.nc"))
//!     .write_summary(&mean, ReduceOperation::Mean)
//!     .unwrap();
//! ```

// Core modules
pub mod discovery;
pub mod ensemble;
pub mod errors;
pub mod metadata;
pub mod netcdf_io;
pub mod parallel;
pub mod statistics;

// Internal modules
pub mod cli;

// Direct re-exports for the public API
pub use discovery::*;
pub use ensemble::*;
pub use errors::*;
pub use metadata::*;
pub use netcdf_io::*;
pub use parallel::*;
pub use statistics::*;

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::ensemble::{GridStack, MaskedGrid, FILL_VALUE, GRID_LAT, GRID_LON};
    pub use crate::errors::{NimbostatError, Result};
    pub use crate::netcdf_io::GridWriter;
    pub use crate::parallel::ParallelConfig;
    pub use crate::statistics::{ReduceOperation, StackReduction};
}
