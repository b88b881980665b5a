#![deny(missing_docs)]
//! A command-line tool that writes a file of random bytes.

use bitkit_core::generator;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Generate random bytes", long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Write 1024 random bytes\ngenerate -o ./random.bin\n\n# Write 16 random bytes\ngenerate --output ./a.bin --num-bytes 16"
)]
struct Cli {
    /// Output file path
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: PathBuf,

    /// Number of random bytes to generate
    #[arg(short, long, default_value_t = 1024)]
    num_bytes: usize,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    info!(
        "Generating {} random bytes at '{}'",
        cli.num_bytes,
        cli.output.display()
    );
    if let Err(e) = generator::generate_random_bytes(&cli.output, cli.num_bytes) {
        error!(
            "Failed to write random bytes to '{}': {e}",
            cli.output.display()
        );
        std::process::exit(1);
    }

    println!(
        "{} random bytes written to {}",
        cli.num_bytes,
        cli.output.display()
    );
}
