//! End-to-end pipeline test: discover input files, extract the observation
//! grids, stack, reduce, write the summary file, and read it back.

use ndarray::Array2;
use netcdf::{create, open, AttributeValue};
use nimbostat::discovery::discover_inputs;
use nimbostat::ensemble::{GridStack, FILL_VALUE, GRID_LAT, GRID_LON};
use nimbostat::netcdf_io::{read_observation_grid, GridWriter, OBSERVATION_VARIABLE};
use nimbostat::statistics::{ReduceOperation, StackReduction};
use std::path::Path;
use tempfile::tempdir;

const BOTH_MASKED: (usize, usize) = (10, 20);
const FIRST_MASKED: (usize, usize) = (30, 40);

fn write_input(path: &Path, base_value: f32, mask_first_only: bool) {
    let mut values = vec![base_value; GRID_LAT * GRID_LON];
    values[BOTH_MASKED.0 * GRID_LON + BOTH_MASKED.1] = FILL_VALUE;
    if mask_first_only {
        values[FIRST_MASKED.0 * GRID_LON + FIRST_MASKED.1] = FILL_VALUE;
    }

    let mut file = create(path).expect("Failed to create input file");
    file.add_dimension("lat", GRID_LAT)
        .expect("Failed to add dimension lat");
    file.add_dimension("lon", GRID_LON)
        .expect("Failed to add dimension lon");

    let mut var = file
        .add_variable::<f32>(OBSERVATION_VARIABLE, &["lat", "lon"])
        .expect("Failed to add variable");
    var.put_attribute("_FillValue", FILL_VALUE)
        .expect("Failed to add _FillValue");
    var.put_attribute("units", "percentage")
        .expect("Failed to add units");

    let data =
        Array2::from_shape_vec((GRID_LAT, GRID_LON), values).expect("Failed to shape input data");
    var.put(data.view(), ..).expect("Failed to write data");
}

fn load_stack(input_dir: &Path) -> GridStack {
    let pattern = format!("{}/scrub*.nc", input_dir.display());
    let paths = discover_inputs(&pattern).expect("Discovery failed");
    assert_eq!(paths.len(), 2, "decoy file must not be discovered");

    let grids = paths
        .into_iter()
        .map(|path| {
            let grid = read_observation_grid(&path, OBSERVATION_VARIABLE)
                .expect("Failed to read observation grid");
            (path, grid)
        })
        .collect();
    GridStack::from_grids(grids).expect("Stacking failed")
}

#[test]
fn test_mean_pipeline_round_trip() {
    let temp_dir = tempdir().expect("Failed to create temp dir");

    // Two observation files plus a decoy the pattern must skip
    write_input(&temp_dir.path().join("scrub_001.nc"), 0.25, true);
    write_input(&temp_dir.path().join("scrub_002.nc"), 0.75, false);
    write_input(&temp_dir.path().join("unrelated.nc"), 0.1, false);

    let stack = load_stack(temp_dir.path());
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.grid_dim(), (GRID_LAT, GRID_LON));

    let mean = stack
        .reduce(ReduceOperation::Mean)
        .expect("Mean reduction failed");

    let output_path = temp_dir.path().join("new_netcdf.nc");
    GridWriter::new(&output_path)
        .write_summary(&mean, ReduceOperation::Mean)
        .expect("Failed to write summary");

    // Read the artifact back and verify it is self-describing
    let file = open(&output_path).expect("Failed to open output file");

    let time_dim = file
        .dimensions()
        .find(|d| d.name() == "time")
        .expect("time dimension missing");
    assert!(time_dim.is_unlimited());

    let lat_dim = file
        .dimensions()
        .find(|d| d.name() == "lat")
        .expect("lat dimension missing");
    assert_eq!(lat_dim.len(), GRID_LAT);
    let lon_dim = file
        .dimensions()
        .find(|d| d.name() == "lon")
        .expect("lon dimension missing");
    assert_eq!(lon_dim.len(), GRID_LON);

    // Coordinate arrays reproduce the 1-degree bin centers exactly
    let lat_var = file.variable("lat").expect("lat variable missing");
    let lat_values: Vec<f32> = lat_var
        .get_values::<f32, _>(..)
        .expect("Failed to read lat");
    assert_eq!(lat_values.len(), GRID_LAT);
    for (i, &v) in lat_values.iter().enumerate() {
        assert_eq!(v, -90.0 + i as f32);
    }
    match lat_var.attribute("units").unwrap().value().unwrap() {
        AttributeValue::Str(units) => assert_eq!(units, "degrees_north"),
        other => panic!("Unexpected lat units attribute: {:?}", other),
    }

    let lon_var = file.variable("lon").expect("lon variable missing");
    let lon_values: Vec<f32> = lon_var
        .get_values::<f32, _>(..)
        .expect("Failed to read lon");
    assert_eq!(lon_values.len(), GRID_LON);
    for (i, &v) in lon_values.iter().enumerate() {
        assert_eq!(v, -180.0 + i as f32);
    }
    match lon_var.attribute("units").unwrap().value().unwrap() {
        AttributeValue::Str(units) => assert_eq!(units, "degrees_east"),
        other => panic!("Unexpected lon units attribute: {:?}", other),
    }

    // Summary variable: attributes and bit-for-bit data round-trip
    let mean_var = file.variable("mean").expect("mean variable missing");
    match mean_var.attribute("units").unwrap().value().unwrap() {
        AttributeValue::Str(units) => assert_eq!(units, "percentage"),
        other => panic!("Unexpected mean units attribute: {:?}", other),
    }
    match mean_var.attribute("long_name").unwrap().value().unwrap() {
        AttributeValue::Str(name) => assert_eq!(name, "Cloud Fraction"),
        other => panic!("Unexpected mean long_name attribute: {:?}", other),
    }
    match mean_var.attribute("_FillValue").unwrap().value().unwrap() {
        AttributeValue::Float(fv) => assert_eq!(fv, FILL_VALUE),
        other => panic!("Unexpected _FillValue attribute: {:?}", other),
    }

    let read_back: Vec<f32> = mean_var
        .get_values::<f32, _>(..)
        .expect("Failed to read mean");
    let written = mean.to_filled(FILL_VALUE);
    assert_eq!(read_back, written.into_raw_vec());

    // (0.25 + 0.75) / 2 in ordinary cells
    assert_eq!(read_back[0], 0.5);
    // Missing in every input: fill value on disk
    assert_eq!(read_back[BOTH_MASKED.0 * GRID_LON + BOTH_MASKED.1], FILL_VALUE);
    // Missing in one input: the present observation alone
    assert_eq!(read_back[FIRST_MASKED.0 * GRID_LON + FIRST_MASKED.1], 0.75);

    // Provenance attribute is stamped
    assert!(file
        .attributes()
        .any(|attr| attr.name() == "history"));
}

#[test]
fn test_exceedance_pipeline() {
    let temp_dir = tempdir().expect("Failed to create temp dir");

    write_input(&temp_dir.path().join("scrub_001.nc"), 0.25, true);
    write_input(&temp_dir.path().join("scrub_002.nc"), 0.75, false);

    let stack = load_stack(temp_dir.path());

    let operation = ReduceOperation::Exceedance { threshold: 0.5 };
    let prob = stack.reduce(operation).expect("Exceedance reduction failed");

    let output_path = temp_dir.path().join("exceedance.nc");
    GridWriter::new(&output_path)
        .write_summary(&prob, operation)
        .expect("Failed to write summary");

    let file = open(&output_path).expect("Failed to open output file");
    let var = file
        .variable("exceedance")
        .expect("exceedance variable missing");
    match var.attribute("units").unwrap().value().unwrap() {
        AttributeValue::Str(units) => assert_eq!(units, "probability"),
        other => panic!("Unexpected units attribute: {:?}", other),
    }

    let read_back: Vec<f32> = var
        .get_values::<f32, _>(..)
        .expect("Failed to read exceedance");

    // Only the 0.75 observation exceeds 0.5, so ordinary cells report 1/2
    assert_eq!(read_back[0], 0.5);
    // Both observations missing: nothing exceeds, denominator still 2
    assert_eq!(read_back[BOTH_MASKED.0 * GRID_LON + BOTH_MASKED.1], 0.0);
    // One missing, one exceeding: 1/2
    assert_eq!(read_back[FIRST_MASKED.0 * GRID_LON + FIRST_MASKED.1], 0.5);
}
