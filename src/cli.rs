//! Command-line interface and run orchestration.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use crate::error::Result;
use crate::{employees, label, split};

#[derive(Parser)]
#[command(name = "paysplit")]
#[command(about = "Split a PDF into single-page files named after employees")]
#[command(version)]
pub struct Cli {
    /// PDF file to split
    pub input_file: PathBuf,

    /// Directory for the generated single-page PDFs
    pub output_folder: PathBuf,

    /// JSON file with the employee roster
    #[arg(long, default_value = "assets/employees.json")]
    pub employees_file: PathBuf,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    execute(&cli.input_file, &cli.output_folder, &cli.employees_file)
}

/// Load the roster, then split the input into one file per employee.
///
/// The date label is computed once here from today's local date; every
/// output of this run shares it.
pub fn execute(input_file: &Path, output_folder: &Path, employees_file: &Path) -> Result<()> {
    let label = label::month_year(chrono::Local::now().date_naive());
    let names = employees::load(employees_file)?;

    info!("input file: {}", input_file.display());
    info!("output folder: {}", output_folder.display());
    info!("employees: {}", names.len());
    info!("generating {} single-page PDF files", names.len());

    split::split(input_file, output_folder, &label, &names)?;

    info!(
        "generated {} files in {}",
        names.len(),
        output_folder.display()
    );
    Ok(())
}
