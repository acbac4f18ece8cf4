//! Pairing check between CDL descriptions and NetCDF output files.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::Result;

/// Result of pairing `.cdl` descriptions with `.nc` files in a directory.
#[derive(Debug, Clone)]
pub struct PairingReport {
    /// Base names present as both `.cdl` and `.nc`
    pub matched: Vec<String>,
    /// Base names with a `.cdl` file but no `.nc` counterpart
    pub missing_netcdf: Vec<String>,
    /// Base names with a `.nc` file but no `.cdl` counterpart
    pub missing_cdl: Vec<String>,
}

impl PairingReport {
    /// True when every file has a counterpart.
    pub fn is_matched(&self) -> bool {
        self.missing_netcdf.is_empty() && self.missing_cdl.is_empty()
    }
}

/// Collect the base names of regular files in `dir` carrying the given
/// extension.
///
/// Only the final extension is stripped, so `a.b.cdl` yields the base name
/// `a.b`. Returned sorted for deterministic reporting.
pub fn scan_base_names(dir: &Path, extension: &str) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some(extension) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.insert(stem.to_string());
        }
    }

    Ok(names)
}

/// Check that every CDL description has a NetCDF counterpart and vice versa.
pub fn check_pairing(dir: &Path) -> Result<PairingReport> {
    let cdl_names = scan_base_names(dir, "cdl")?;
    let netcdf_names = scan_base_names(dir, "nc")?;

    Ok(PairingReport {
        matched: cdl_names.intersection(&netcdf_names).cloned().collect(),
        missing_netcdf: cdl_names.difference(&netcdf_names).cloned().collect(),
        missing_cdl: netcdf_names.difference(&cdl_names).cloned().collect(),
    })
}
