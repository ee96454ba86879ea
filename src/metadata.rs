//! Grid summaries and output-file metadata inspection

use crate::ensemble::MaskedGrid;
use crate::errors::Result;
use netcdf::File;

/// Prints quick statistics (min/mean/max and valid-cell count) for a grid.
pub fn summarize_grid(label: &str, grid: &MaskedGrid) {
    let valid: Vec<f32> = grid
        .data()
        .iter()
        .zip(grid.mask().iter())
        .filter(|(_, &masked)| !masked)
        .map(|(&value, _)| value)
        .collect();

    println!("\n Summary for {}", label);
    println!("================================");

    if valid.is_empty() {
        println!("   (no valid cells)");
        return;
    }

    let min = valid.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = valid.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let mean: f32 = valid.iter().sum::<f32>() / valid.len() as f32;

    println!("   Min: {:.4}", min);
    println!("   Max: {:.4}", max);
    println!("   Mean: {:.4}", mean);
    println!("   Valid cells: {} / {}", valid.len(), grid.data().len());
}

/// Prints global attributes, dimensions and variables of a NetCDF file.
pub fn print_metadata(file: &File) -> Result<()> {
    println!("\n===== Global Attributes =====");
    for attr in file.attributes() {
        println!("- {}: {:?}", attr.name(), attr.value()?);
    }

    println!("\n===== Dimensions =====");
    for dim in file.dimensions() {
        let length_info = if dim.is_unlimited() {
            format!("{} (unlimited)", dim.len())
        } else {
            dim.len().to_string()
        };
        println!("- {} = {}", dim.name(), length_info);
    }

    println!("\n===== Variables =====");
    for var in file.variables() {
        let dims: Vec<String> = var
            .dimensions()
            .iter()
            .map(|d| format!("{}[{}]", d.name(), d.len()))
            .collect();
        println!("- {} ({})", var.name(), dims.join(", "));
    }

    Ok(())
}
