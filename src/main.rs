//! copycode - Bundle source files into one document
//!
//! Main entry point for the `copy-code` CLI.

use clap::Parser;
use copycode::aggregator::Aggregator;
use copycode::config::{
    AggregatorConfig, DEFAULT_EXCLUDED_NAME, DEFAULT_OUTPUT_PATH, DEFAULT_PRIMARY_SUFFIX,
    DEFAULT_SECONDARY_SUFFIX, DEFAULT_SOURCE_DIR,
};
use std::path::PathBuf;
use std::process;

/// Concatenate a directory's source files into one pasteable document
#[derive(Parser, Debug)]
#[command(name = "copy-code")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory whose files are bundled (not recursed)
    #[arg(short, long, env = "COPY_CODE_SOURCE", default_value = DEFAULT_SOURCE_DIR)]
    source: PathBuf,

    /// File that receives the combined document (overwritten)
    #[arg(short, long, env = "COPY_CODE_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Suffix that always makes a file eligible
    #[arg(long, default_value = DEFAULT_PRIMARY_SUFFIX)]
    primary_ext: String,

    /// Suffix that makes a file eligible unless it is excluded
    #[arg(long, default_value = DEFAULT_SECONDARY_SUFFIX)]
    secondary_ext: String,

    /// File name never bundled through the secondary suffix (repeatable)
    #[arg(long = "exclude", value_name = "NAME", default_value = DEFAULT_EXCLUDED_NAME)]
    excluded: Vec<String>,

    /// Print the eligible file names instead of writing the output
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn into_config(self) -> AggregatorConfig {
        AggregatorConfig::new(self.source, self.output)
            .with_suffixes(self.primary_ext, self.secondary_ext)
            .with_excluded_names(self.excluded)
    }
}

fn main() {
    // Initialize logging
    if let Err(e) = copycode::logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::debug!(kind = e.kind(), "Run failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> copycode::Result<()> {
    let list_only = cli.list;
    let aggregator = Aggregator::new(cli.into_config())?;

    if list_only {
        for name in aggregator.collect()? {
            println!("{}", name);
        }
        return Ok(());
    }

    let report = aggregator.run()?;
    println!(
        "Bundled {} file(s) into {} ({} bytes)",
        report.files.len(),
        report.output_path.display(),
        report.bytes_written
    );

    Ok(())
}
