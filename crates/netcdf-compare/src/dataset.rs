//! Reading data arrays out of NetCDF files.

use std::path::Path;

use tracing::debug;

use crate::error::{CompareError, Result};

/// A data variable read in full: flat values plus dimension shape.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldData {
    /// Length of each dimension, outermost first; empty for a scalar
    pub shape: Vec<usize>,
    /// Values in row-major order
    pub values: Vec<f64>,
}

/// Reads a named data variable from a NetCDF file.
pub trait DatasetReader {
    fn read_field(&self, path: &Path, name: &str) -> Result<FieldData>;
}

/// Production reader backed by the `netcdf` crate.
pub struct NetcdfReader;

impl DatasetReader for NetcdfReader {
    fn read_field(&self, path: &Path, name: &str) -> Result<FieldData> {
        let file = netcdf::open(path).map_err(|e| {
            CompareError::DatasetRead(format!("failed to open {}: {}", path.display(), e))
        })?;

        let var = file.variable(name).ok_or_else(|| {
            CompareError::MissingVariable(format!("{} in {}", name, path.display()))
        })?;

        let shape: Vec<usize> = var.dimensions().iter().map(|d| d.len()).collect();

        // Read the full extents; libnetcdf converts whatever the stored
        // numeric type is to f64
        let values: Vec<f64> = var.get_values(..).map_err(|e| {
            CompareError::DatasetRead(format!(
                "failed to read {} from {}: {}",
                name,
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), variable = name, len = values.len(), "Read data variable");

        Ok(FieldData { shape, values })
    }
}
