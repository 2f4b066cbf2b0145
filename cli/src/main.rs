//! pdfsift CLI - embedded stream extraction and decode triage

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

#[derive(Parser)]
#[command(name = "pdfsift")]
#[command(version)]
#[command(about = "Locate and decode embedded streams in PDF-like files", long_about = None)]
struct Cli {
    /// Input file to analyze
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,
}

/// Exactly one input path is accepted; zero or several fall back to usage.
fn single_input(mut inputs: Vec<PathBuf>) -> Option<PathBuf> {
    if inputs.len() == 1 {
        inputs.pop()
    } else {
        None
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let Some(input) = single_input(cli.inputs) else {
        println!("Usage: pdfsift <FILE>");
        println!("       pdfsift --help for more information");
        return ExitCode::FAILURE;
    };

    match pdfsift::analyze_file(&input) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
