//! Quantization verification CLI.
//!
//! Checks that every `.cdl` description in a directory has a matching `.nc`
//! output file, then compares each output's data array against a reference
//! regenerated from the CDL with `ncgen`. Exits non-zero if either phase
//! finds a problem.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use netcdf_compare::{
    check_pairing, CheckOptions, NcgenGenerator, NetcdfReader, QuantizeChecker, DEFAULT_TOLERANCE,
};

#[derive(Parser, Debug)]
#[command(name = "quantize-check")]
#[command(about = "Validate quantized NetCDF output against reference CDL descriptions")]
struct Args {
    /// Directory containing paired .cdl and .nc files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Variable name holding the data array
    #[arg(short, long, default_value = "field")]
    field: String,

    /// Relative tolerance for value comparison
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Path to the ncgen executable
    #[arg(long, default_value = "ncgen")]
    ncgen: PathBuf,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    print!("Check the NetCDF and CDL files match: ");
    let _ = std::io::stdout().flush();

    let report = check_pairing(&args.dir)?;
    if !report.is_matched() {
        println!("FAIL");
        if !report.missing_netcdf.is_empty() {
            eprintln!("The following CDL files have no corresponding NetCDF file:");
            for name in &report.missing_netcdf {
                eprintln!("{name}.cdl");
            }
        }
        if !report.missing_cdl.is_empty() {
            eprintln!("The following NetCDF files have no corresponding CDL file:");
            for name in &report.missing_cdl {
                eprintln!("{name}.nc");
            }
        }
        std::process::exit(1);
    }

    println!("OK");
    println!();
    debug!(matched = report.matched.len(), "Pairing check passed");

    let checker = QuantizeChecker::new(
        args.dir,
        NcgenGenerator::new(args.ncgen),
        NetcdfReader,
        CheckOptions {
            field: args.field,
            tolerance: args.tolerance,
        },
    );

    let summary = checker.compare_all()?;
    if !summary.passed() {
        std::process::exit(1);
    }

    Ok(())
}
