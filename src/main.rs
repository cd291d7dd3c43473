//! Command-line entry point: writes the NormalDance coding-standards guide.
//!
//! # Usage
//!
//! ```sh
//! coding-standards
//! coding-standards -o docs/standards.docx --verify
//! ```

use clap::Parser;
use coding_standards::standards::{self, OUTPUT_FILE};
use std::path::PathBuf;
use std::process::ExitCode;

/// Generate the NormalDance coding-standards document
#[derive(Parser, Debug)]
#[command(
    name = "coding-standards",
    about = "Generate the NormalDance coding-standards guide as a .docx file",
    version
)]
struct Args {
    /// Output file; an existing file is replaced
    #[arg(short, long, value_name = "OUTPUT", default_value = OUTPUT_FILE)]
    output: PathBuf,

    /// Re-open the saved document and check its section headings
    #[arg(long)]
    verify: bool,

    /// Do not print the confirmation line
    #[arg(short, long)]
    quiet: bool,
}

fn run(args: &Args) -> coding_standards::Result<()> {
    standards::generate(&args.output)?;
    if args.verify {
        standards::verify(&args.output)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => {
            if !args.quiet {
                println!("Документ '{}' успешно создан!", args.output.display());
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
