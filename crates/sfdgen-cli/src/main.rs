//! sfdgen - converts note sheets into binary SFD melody files.
//!
//! Reads a JSON or CSV note sheet and writes the fixed-width `.sfd` layout
//! the buzzer firmware streams from its SD card.

use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

// Use modules from the library crate
use sfdgen_cli::commands;

/// sfdgen - note sheet to SFD converter
#[derive(Parser)]
#[command(name = "sfdgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input note sheet (.json or .csv)
    input: PathBuf,

    /// Destination path for the encoded .sfd file
    output: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            print_usage();
            return ExitCode::from(1);
        }
    };

    match commands::convert::run(&cli.input, &cli.output) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}

/// Usage text shown when the argument list is wrong, on stdout.
fn print_usage() {
    println!("Usage:");
    println!("  sfdgen input.json output.sfd");
    println!("  sfdgen input.csv output.sfd");
    println!();
    println!("JSON format:");
    println!(
        "{}",
        r#"{
  "looping": true,
  "notes": [ {"frequency":440,"duration":500}, ... ]
}"#
    );
}
