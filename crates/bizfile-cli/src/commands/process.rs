//! Process command - extract a record from a single OCR text file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::{debug, info};

use bizfile_core::models::config::BizfileConfig;
use bizfile_core::{Document, ExtractionRecord, ProfileParser, RecordParser};

use super::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (OCR text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Emit the document envelope (status, timestamps) instead of the bare record
    #[arg(long)]
    document: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// List fields that could not be extracted
    #[arg(long)]
    show_missing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output, one row per field
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = fs::read_to_string(&args.input)?;
    let parser = ProfileParser::from_config(&config.extraction)?;

    let mut document = Document::new(file_name(&args.input)).with_text(text);
    let result = match document.usable_text(config.extraction.min_text_length) {
        Ok(text) => parser.parse(text),
        Err(e) => anyhow::bail!("Refusing {}: {}", args.input.display(), e),
    };
    document.complete(result.record);

    if args.show_missing && !result.warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let options = RenderOptions::new(&config, args.document, args.pretty);
    let output = render(&mut document, args.format, options)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!(
        "Total processing time: {:?} (extraction {}ms)",
        start.elapsed(),
        result.processing_time_ms
    );

    Ok(())
}

/// File name used for the document envelope.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document")
        .to_string()
}

/// How a finished document is rendered.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    envelope: bool,
    pretty: bool,
    include_text: bool,
}

impl RenderOptions {
    pub fn new(config: &BizfileConfig, envelope: bool, pretty: bool) -> Self {
        Self {
            envelope,
            pretty: pretty || config.output.pretty,
            include_text: config.output.include_text,
        }
    }
}

/// Render a completed document in the requested format.
pub fn render(
    document: &mut Document,
    format: OutputFormat,
    options: RenderOptions,
) -> anyhow::Result<String> {
    if !options.include_text {
        document.extracted_text = None;
    }

    let record = document
        .entities
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("{} has no extracted record", document.file_name))?;

    match format {
        OutputFormat::Json if options.envelope => to_json(&*document, options.pretty),
        OutputFormat::Json => to_json(record, options.pretty),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn format_csv(record: &ExtractionRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["section", "field", "value"])?;

    let groups = [
        ("Particulars", record.particulars.fields()),
        ("Principal Activities", record.principal_activities.fields()),
        ("Capital", record.capital.fields()),
        ("Registered Office Address", record.registered_office.fields()),
    ];
    for (section, fields) in &groups {
        for (label, value) in fields {
            wtr.write_record([*section, *label, value.render()])?;
        }
    }

    for (i, officer) in record.officers.iter().enumerate() {
        let section = format!("Officer {}", i + 1);
        let fields = [
            ("Name", officer.name.as_str()),
            ("ID", officer.id.render()),
            ("Nationality / Citizenship", officer.nationality.render()),
            ("Source of Address", officer.address_source.render()),
            ("Address", officer.address.render()),
            ("Position Held", officer.position.render()),
            ("Date of Appointment", officer.appointed_on.render()),
        ];
        for (label, value) in fields {
            wtr.write_record([section.as_str(), label, value])?;
        }
    }

    for (i, shareholder) in record.shareholders.iter().enumerate() {
        let section = format!("Shareholder {}", i + 1);
        let fields = [
            ("Name", &shareholder.name),
            ("ID", &shareholder.id),
            ("Nationality / Citizenship / Place of Incorporation", &shareholder.nationality),
            ("Source of Address", &shareholder.address_source),
            ("Address", &shareholder.address),
            ("Ordinary (Number)", &shareholder.ordinary_shares),
            ("Currency", &shareholder.currency),
        ];
        for (label, value) in fields {
            wtr.write_record([section.as_str(), label, value.render()])?;
        }
    }

    for (code, definition) in &record.abbreviations {
        wtr.write_record(["Abbreviation", code.as_str(), definition.render()])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ExtractionRecord) -> String {
    let mut output = String::new();
    let p = &record.particulars;

    output.push_str(&format!("Company: {} ({})\n", p.company_name, p.registration_no));
    output.push_str(&format!("Type: {}\n", p.company_type));
    output.push_str(&format!("Status: {} since {}\n", p.status, p.status_date));
    output.push_str(&format!("Incorporated: {}\n", p.incorporation_date));
    output.push('\n');

    let a = &record.principal_activities;
    output.push_str("Activities:\n");
    output.push_str(&format!("  {} - {}\n", a.primary_activity, a.primary_description));
    output.push_str(&format!("  {} - {}\n", a.secondary_activity, a.secondary_description));
    output.push('\n');

    let c = &record.capital;
    output.push_str("Capital:\n");
    output.push_str(&format!(
        "  Issued:  {} {} ({} {} shares)\n",
        c.issued.amount, c.issued.currency, c.issued.number_of_shares, c.issued.share_type
    ));
    output.push_str(&format!(
        "  Paid-up: {} {} ({})\n",
        c.paid_up.amount, c.paid_up.currency, c.paid_up.share_type
    ));
    output.push('\n');

    let r = &record.registered_office;
    output.push_str(&format!("Registered office: {}\n", r.address));
    output.push_str(&format!(
        "  Last AGM: {}  Last AR: {}  FYE: {}\n",
        r.last_agm, r.last_annual_return, r.financial_year_end
    ));
    output.push('\n');

    output.push_str(&format!("Officers ({}):\n", record.officers.len()));
    for officer in &record.officers {
        output.push_str(&format!(
            "  {} ({}), {}, appointed {}\n",
            officer.name, officer.id, officer.position, officer.appointed_on
        ));
    }
    output.push('\n');

    output.push_str(&format!("Shareholders ({}):\n", record.shareholders.len()));
    for shareholder in &record.shareholders {
        output.push_str(&format!(
            "  {} ({}): {} ordinary, {}\n",
            shareholder.name, shareholder.id, shareholder.ordinary_shares, shareholder.currency
        ));
    }

    output
}
