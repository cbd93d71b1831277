use anyhow::{Context, Result};
use benford::classifier::ClassifierConfig;
use benford::cli::{Cli, OutputFormat};
use benford::csv_output::{CsvDocument, CsvOutput};
use benford::json_output::JsonReport;
use benford::processor::{BenfordProcessor, Document, RoutedDocument};
use benford::stats::RoutingStats;
use clap::Parser;
use std::fs;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Merge the optional config file with command-line overrides
fn build_config(args: &Cli) -> Result<ClassifierConfig> {
    let mut config = match &args.config {
        Some(path) => ClassifierConfig::from_toml(path)?,
        None => ClassifierConfig::default(),
    };

    if let Some(alpha) = args.alpha {
        config.alpha = alpha;
    }

    if let Some(min_sample) = args.min_sample {
        config.min_sample = Some(ClassifierConfig::checked_min_sample(min_sample)?);
    }

    if args.no_min_sample {
        config.min_sample = None;
    }

    if args.legacy_zero_sample {
        config.strict_minimum = false;
    }

    config.validate()?;
    Ok(config)
}

/// Read every input document into memory
fn read_documents(files: &[PathBuf]) -> Result<Vec<Document>> {
    if files.is_empty() {
        return Ok(vec![read_stdin()?]);
    }

    files
        .iter()
        .map(|path| {
            if path.as_os_str() == "-" {
                return read_stdin();
            }
            let content = fs::read(path)
                .with_context(|| format!("Failed to read document: {}", path.display()))?;
            Ok(Document::new(path.display().to_string(), content))
        })
        .collect()
}

fn read_stdin() -> Result<Document> {
    let mut content = Vec::new();
    std::io::stdin()
        .read_to_end(&mut content)
        .context("Failed to read document from stdin")?;
    Ok(Document::new("-", content))
}

/// File name to use for a routed document (stdin is written as `stdin`)
fn routed_file_name(document_name: &str) -> PathBuf {
    if document_name == "-" {
        return PathBuf::from("stdin");
    }
    Path::new(document_name)
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("stdin"))
}

/// Candidate target for the `attempt`-th collision: `x.txt`, `x-1.txt`, `x-2.txt`, ...
fn numbered_target(target_dir: &Path, file_name: &Path, attempt: u32) -> PathBuf {
    if attempt == 0 {
        return target_dir.join(file_name);
    }
    let stem = file_name
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let numbered = match file_name.extension() {
        Some(ext) => format!("{}-{}.{}", stem, attempt, ext.to_string_lossy()),
        None => format!("{}-{}", stem, attempt),
    };
    target_dir.join(numbered)
}

/// Copy the original bytes into the relationship's directory
///
/// Existing files are never overwritten; a numbered name is picked instead.
fn route_to_dir(dir: &Path, routed: &RoutedDocument) -> Result<()> {
    let target_dir = dir.join(routed.relationship.name());
    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create directory: {}", target_dir.display()))?;

    let file_name = routed_file_name(&routed.document.name);
    let mut attempt = 0;
    let (target, mut file) = loop {
        let target = numbered_target(&target_dir, &file_name, attempt);
        match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
        {
            Ok(file) => break (target, file),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to create file: {}", target.display()))
            }
        }
    };

    file.write_all(&routed.document.content)
        .with_context(|| format!("Failed to write document: {}", target.display()))?;
    tracing::debug!("Routed {} to {}", routed.document.name, target.display());
    Ok(())
}

fn format_text_line(routed: &RoutedDocument) -> String {
    let assessment = &routed.assessment;
    match &assessment.test {
        Some(test) => format!(
            "{}: {} (n={}, X²={:.4}, p={:.4})",
            routed.document.name,
            routed.relationship,
            assessment.sample_size,
            test.statistic,
            test.pvalue
        ),
        None => format!(
            "{}: {} (n={})",
            routed.document.name, routed.relationship, assessment.sample_size
        ),
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = build_config(&args)?;
    let processor = BenfordProcessor::new(config, args.routing)?;
    let documents = read_documents(&args.files)?;

    let mut stats = RoutingStats::new();
    let mut json = JsonReport::new(
        processor.config().clone(),
        processor.mode(),
        *processor.classifier().distribution().percentages(),
    );
    let mut csv = CsvOutput::new();

    for document in documents {
        let routed = processor.process(document)?;

        if let Some(dir) = &args.route_dir {
            route_to_dir(dir, &routed)?;
        }

        match args.format {
            OutputFormat::Text => {
                println!("{}", format_text_line(&routed));
                if args.verbose {
                    println!(
                        "{}",
                        routed
                            .assessment
                            .to_report_string(processor.classifier().distribution())
                    );
                }
            }
            OutputFormat::Json => json.add_document(&routed),
            OutputFormat::Csv => csv.add_document(CsvDocument::from(&routed)),
        }

        stats.record(&routed);
    }

    match args.format {
        OutputFormat::Text => {}
        OutputFormat::Json => println!("{}", json.to_json()?),
        OutputFormat::Csv => print!("{}", csv.to_csv()),
    }

    if args.summary {
        stats.print_summary();
    }

    Ok(())
}
