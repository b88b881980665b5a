#![deny(missing_docs)]
//! A command-line tool that counts the differing bits between two binary files.

use bitkit_core::{CompareError, comparator};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Compare two binary files", long_about = None)]
#[command(after_help = "EXAMPLES:\n  \n# Count differing bits\ncompare ./x.bin ./y.bin")]
struct Cli {
    /// First file to compare
    file1: PathBuf,

    /// Second file to compare
    file2: PathBuf,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    info!(
        "Comparing '{}' with '{}'",
        cli.file1.display(),
        cli.file2.display()
    );
    match comparator::compare_files(&cli.file1, &cli.file2) {
        Ok(result) => println!("{result}"),
        Err(e @ CompareError::LengthMismatch { .. }) => {
            error!(
                "Cannot compare '{}' and '{}': {e}",
                cli.file1.display(),
                cli.file2.display()
            );
            std::process::exit(1);
        }
        Err(e) => {
            error!("Failed to read input files: {e}");
            std::process::exit(1);
        }
    }
}
