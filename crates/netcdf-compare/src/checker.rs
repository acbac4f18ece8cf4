//! Per-file comparison pipeline and whole-directory run loop.

use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::compare::{allclose, ComparisonOutcome, DEFAULT_TOLERANCE};
use crate::dataset::DatasetReader;
use crate::error::Result;
use crate::pairing::scan_base_names;
use crate::reference::{ReferenceFile, ReferenceGenerator};

/// Options for a comparison run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Variable name holding the data array
    pub field: String,
    /// Relative tolerance for value comparison
    pub tolerance: f64,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            field: "field".to_string(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

/// Totals for a comparison run.
#[derive(Debug, Clone, Default)]
pub struct CompareSummary {
    pub checked: usize,
    pub failures: usize,
}

impl CompareSummary {
    pub fn passed(&self) -> bool {
        self.failures == 0
    }
}

/// Drives the per-file comparison pipeline over a directory of paired files.
///
/// Generic over the reference generator and dataset reader so tests can
/// substitute fakes for `ncgen` and the NetCDF library.
pub struct QuantizeChecker<G, R> {
    dir: PathBuf,
    generator: G,
    reader: R,
    options: CheckOptions,
}

impl<G: ReferenceGenerator, R: DatasetReader> QuantizeChecker<G, R> {
    pub fn new(dir: impl Into<PathBuf>, generator: G, reader: R, options: CheckOptions) -> Self {
        Self {
            dir: dir.into(),
            generator,
            reader,
            options,
        }
    }

    /// Compare one NetCDF file against a reference regenerated from its CDL
    /// description.
    ///
    /// The `<base>_ref.nc` file is removed on every path out of this
    /// function, including generation and read failures.
    pub fn compare_file(&self, base: &str) -> Result<ComparisonOutcome> {
        let cdl_path = self.dir.join(format!("{base}.cdl"));
        let netcdf_path = self.dir.join(format!("{base}.nc"));
        let reference = ReferenceFile::new(self.dir.join(format!("{base}_ref.nc")));

        self.generator.generate(&cdl_path, reference.path())?;

        let test = self.reader.read_field(&netcdf_path, &self.options.field)?;
        let expected = self.reader.read_field(reference.path(), &self.options.field)?;

        Ok(allclose(&test, &expected, self.options.tolerance))
    }

    /// Compare every `.nc` file in the directory against its regenerated
    /// reference, printing per-file progress.
    ///
    /// A fault on one file is reported as that file's failure and the run
    /// continues with the remaining files.
    pub fn compare_all(&self) -> Result<CompareSummary> {
        let mut summary = CompareSummary::default();

        for base in scan_base_names(&self.dir, "nc")? {
            print!("Checking file {base}.nc ");
            let _ = std::io::stdout().flush();

            match self.compare_file(&base) {
                Ok(ComparisonOutcome::Match) => println!("OK"),
                Ok(ComparisonOutcome::ShapeMismatch { test, reference }) => {
                    println!("FAIL");
                    eprintln!(
                        "The data array in {base}.nc has shape {test:?} but the reference \
                         generated from {base}.cdl has shape {reference:?}"
                    );
                    summary.failures += 1;
                }
                Ok(ComparisonOutcome::ValueMismatch {
                    index,
                    test,
                    reference,
                }) => {
                    println!("FAIL");
                    eprintln!(
                        "The data array in {base}.nc differs from the reference generated \
                         from {base}.cdl (element {index}: {test} vs {reference})"
                    );
                    summary.failures += 1;
                }
                Err(e) => {
                    println!("FAIL");
                    eprintln!("Could not compare {base}.nc against {base}.cdl: {e}");
                    summary.failures += 1;
                }
            }

            summary.checked += 1;
        }

        debug!(
            checked = summary.checked,
            failures = summary.failures,
            "Comparison phase complete"
        );

        Ok(summary)
    }
}
