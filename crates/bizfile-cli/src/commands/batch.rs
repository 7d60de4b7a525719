//! Batch processing command for multiple OCR text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{debug, error, warn};

use bizfile_core::{Document, DocumentStatus, ProfileExtractor, ProfileParser};

use super::load_config;
use super::process::{file_name, render, OutputFormat, RenderOptions};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    document: Document,
    processing_time_ms: u64,
}

/// One line of `summary.csv`.
#[derive(Serialize)]
struct SummaryRow<'a> {
    filename: &'a str,
    status: DocumentStatus,
    registration_no: &'a str,
    company_name: &'a str,
    officers: usize,
    shareholders: usize,
    missing_fields: usize,
    uploaded_at: String,
    processing_time_ms: u64,
    error: &'a str,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(output_dir) = &args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = ProfileParser::from_config(&config.extraction)?;
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let mut document = Document::new(file_name(&path));

        match fs::read_to_string(&path) {
            Ok(text) => {
                document = document.with_text(text);
                // A refusal is recorded on the document itself
                let _ = parser.extract_document(&mut document, config.extraction.min_text_length);
            }
            Err(e) => document.fail(e.to_string()),
        }

        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        if let Some(reason) = &document.failure {
            if args.continue_on_error {
                warn!("Failed to process {}: {}", path.display(), reason);
            } else {
                error!("Failed to process {}: {}", path.display(), reason);
                pb.abandon();
                anyhow::bail!("Processing failed for {}: {}", path.display(), reason);
            }
        }

        results.push(ProcessResult {
            path,
            document,
            processing_time_ms,
        });
        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    // Write outputs
    if let Some(output_dir) = &args.output_dir {
        let options = RenderOptions::new(&config, false, false);
        for result in results.iter_mut().filter(|r| r.document.is_done()) {
            let stem = result
                .path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("profile");
            let output_path = output_dir.join(format!("{}.{}", stem, args.format.extension()));

            let content = render(&mut result.document, args.format, options)?;
            fs::write(&output_path, content)?;
            debug!("Wrote output to {}", output_path.display());
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| !r.document.is_done()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.document.failure.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    for result in results {
        let document = &result.document;
        let status = document.status;

        let row = match &document.entities {
            Some(record) => SummaryRow {
                filename: &document.file_name,
                status,
                registration_no: record.particulars.registration_no.render(),
                company_name: record.particulars.company_name.render(),
                officers: record.officers.len(),
                shareholders: record.shareholders.len(),
                missing_fields: record.missing_fields().len(),
                uploaded_at: document.uploaded_at.to_rfc3339(),
                processing_time_ms: result.processing_time_ms,
                error: "",
            },
            None => SummaryRow {
                filename: &document.file_name,
                status,
                registration_no: "",
                company_name: "",
                officers: 0,
                shareholders: 0,
                missing_fields: 0,
                uploaded_at: document.uploaded_at.to_rfc3339(),
                processing_time_ms: result.processing_time_ms,
                error: document.failure.as_deref().unwrap_or(""),
            },
        };

        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
