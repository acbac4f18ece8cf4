//! Verification of quantized NetCDF output against reference CDL descriptions.
//!
//! This crate provides tools to:
//! - Pair `.cdl` descriptions with generated `.nc` files in a directory
//! - Regenerate reference datasets from CDL with the external `ncgen` tool
//! - Compare data arrays element-wise within a relative tolerance
//!
//! The external tool and the NetCDF library sit behind the
//! [`ReferenceGenerator`] and [`DatasetReader`] traits so the comparison
//! pipeline can be exercised with fakes instead of real binaries and files.

pub mod checker;
pub mod compare;
pub mod dataset;
pub mod error;
pub mod pairing;
pub mod reference;

pub use checker::{CheckOptions, CompareSummary, QuantizeChecker};
pub use compare::{allclose, ComparisonOutcome, DEFAULT_TOLERANCE};
pub use dataset::{DatasetReader, FieldData, NetcdfReader};
pub use error::{CompareError, Result};
pub use pairing::{check_pairing, PairingReport};
pub use reference::{NcgenGenerator, ReferenceFile, ReferenceGenerator};
