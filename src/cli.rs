//! Command-line interface.

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use crate::config::parse_request;
use crate::error::Result;
use crate::extract::extract;
use crate::io::{read_document, write_document};
use crate::rewrite::{output_name, remove_rules, splice_include};
use crate::types::RequestedAction;

/// Extract the rules of an .rls file whose actions assign the requested properties.
#[derive(Debug, Parser)]
#[command(name = "rls-tool")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Rule file to read
    pub input: PathBuf,

    /// Requested property assignments as KEY=VALUE
    #[arg(required = true, num_args = 1.., value_parser = parse_request)]
    pub actions: Vec<RequestedAction>,

    /// Remove the extracted rules from the input file
    #[arg(short, long)]
    pub remove: bool,

    /// Prepend an include of the output file to the input file
    #[arg(short, long)]
    pub include: bool,

    /// Print the extracted rules instead of writing any files
    #[arg(long)]
    pub dry_run: bool,
}

/// What a run did, for the summary printed to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output_path: PathBuf,
    pub written: usize,
    /// Rules cut from the input, when `--remove` was given.
    pub removed: Option<usize>,
    pub included: bool,
}

/// Parse arguments from the environment and run.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.dry_run {
        let document = read_document(&cli.input)?;
        print!("{}", extract(&document, &cli.actions).output);
        return Ok(());
    }
    let outcome = execute(&cli)?;
    print_summary(&cli.input, &outcome);
    Ok(())
}

/// Extract, write the output file next to the input, and rewrite the input if asked.
///
/// # Errors
///
/// Fails on an invalid input path before anything is written, or on I/O errors.
pub fn execute(cli: &Cli) -> Result<Outcome> {
    let document = read_document(&cli.input)?;
    let extraction = extract(&document, &cli.actions);

    let name = output_name(&cli.actions);
    let output_path = cli.input.with_file_name(&name);
    write_document(&output_path, &extraction.output)?;
    info!(path = %output_path.display(), rules = extraction.kept.len(), "wrote extracted rules");

    let mut source = document;
    let mut removed = None;
    if cli.remove {
        let (rest, count) = remove_rules(&source, &extraction.kept);
        source = rest;
        removed = Some(count);
    }
    if cli.include {
        source = splice_include(&source, &name);
    }
    if cli.remove || cli.include {
        write_document(&cli.input, &source)?;
    }

    Ok(Outcome {
        output_path,
        written: extraction.kept.len(),
        removed,
        included: cli.include,
    })
}

fn print_summary(input: &Path, outcome: &Outcome) {
    println!(
        "Wrote {} rule(s) to {}",
        outcome.written,
        outcome.output_path.display()
    );
    if let Some(removed) = outcome.removed {
        println!("Removed {removed} rule(s) from {}", input.display());
    }
    if outcome.included {
        println!(
            "Added include of {} to {}",
            outcome
                .output_path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_default(),
            input.display()
        );
    }
}
