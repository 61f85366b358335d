//! splitpdf CLI - split a proposal PDF into one PDF per component

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use splitpdf::split::prepare_output_dir;
use splitpdf::{SplitReport, Splitter};

/// Default output directory when none is given.
const DEFAULT_OUTPUT_DIR: &str = "split_pdfs";

#[derive(Parser)]
#[command(name = "splitpdf")]
#[command(version)]
#[command(about = "Split a proposal PDF into one PDF per component", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Output directory (created if missing)
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cmd_split(&cli.input, &cli.output) {
        Ok(report) if report.is_complete() => {}
        Ok(report) => {
            eprintln!(
                "{}: {} component(s) could not be written",
                "Error".red().bold(),
                report.failures.len()
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn cmd_split(input: &Path, output: &Path) -> Result<SplitReport, Box<dyn std::error::Error>> {
    println!("{} {}", "Splitting".cyan(), input.display());

    let splitter = Splitter::open(input)?;
    let plan = splitter.plan()?;
    prepare_output_dir(output)?;

    let pb = ProgressBar::new(plan.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut report = SplitReport::for_plan(&plan);
    for range in &plan.ranges {
        pb.set_message(range.component_name.clone());
        let outcome = splitter.extract(range, output);
        report.record(range, outcome);
        pb.inc(1);
    }
    pb.finish_and_clear();

    print_report(&report);
    Ok(report)
}

fn print_report(report: &SplitReport) {
    println!(
        "\n{} {} PDFs:",
        "Successfully created".green().bold(),
        report.outputs.len()
    );
    for output in &report.outputs {
        println!(
            "  {} {}: {} {}",
            "✓".green(),
            output.component_name,
            output.path.display(),
            format!(
                "(pages {}-{})",
                output.start_page + 1,
                output.end_page
            )
            .dimmed()
        );
    }

    if !report.missing.is_empty() {
        println!("\n{}", "Not found:".yellow().bold());
        for name in &report.missing {
            println!("  {} {}", "-".dimmed(), name);
        }
    }

    if !report.failures.is_empty() {
        println!("\n{}", "Failed:".red().bold());
        for failure in &report.failures {
            println!(
                "  {} {}: {}",
                "✗".red(),
                failure.component_name,
                failure.message
            );
        }
    }
}
