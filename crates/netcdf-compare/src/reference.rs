//! Reference dataset generation via the external `ncgen` tool.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{CompareError, Result};

/// Generates a binary NetCDF reference file from a CDL description.
pub trait ReferenceGenerator {
    fn generate(&self, cdl: &Path, output: &Path) -> Result<()>;
}

/// Production generator invoking `ncgen -k nc4 -o <output> <cdl>`.
pub struct NcgenGenerator {
    program: PathBuf,
}

impl NcgenGenerator {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for NcgenGenerator {
    fn default() -> Self {
        Self::new("ncgen")
    }
}

impl ReferenceGenerator for NcgenGenerator {
    fn generate(&self, cdl: &Path, output: &Path) -> Result<()> {
        debug!(cdl = %cdl.display(), output = %output.display(), "Generating reference file");

        let result = Command::new(&self.program)
            .arg("-k")
            .arg("nc4")
            .arg("-o")
            .arg(output)
            .arg(cdl)
            .output()
            .map_err(|e| {
                CompareError::ReferenceGeneration(format!(
                    "failed to run {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        if !result.status.success() {
            return Err(CompareError::ReferenceGeneration(format!(
                "{} failed on {}: {}",
                self.program.display(),
                cdl.display(),
                String::from_utf8_lossy(&result.stderr).trim()
            )));
        }

        Ok(())
    }
}

/// Removes the reference file when dropped, so cleanup holds on every exit
/// path of a comparison, including generation failures.
pub struct ReferenceFile {
    path: PathBuf,
}

impl ReferenceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ReferenceFile {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
