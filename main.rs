use anyhow::{Context, Result};
use clap::Parser;
use pdf_text_extract::{EmptyPagePolicy, ExtractConfig, Extractor};
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

/// Extract the text of a PDF page by page and save it to a text file
#[derive(Parser, Debug)]
#[command(name = "pdf-text-extract")]
#[command(version, about, long_about = None)]
struct Cli {
    /// PDF file to read
    source: Option<PathBuf>,

    /// Text file to write (default: extracted_text.txt next to the PDF)
    destination: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// How to treat pages without extractable text
    #[arg(long, value_enum, value_name = "POLICY")]
    empty_pages: Option<EmptyPagePolicy>,

    /// Do not print the extracted text
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Layer command-line values over the config file (or the defaults)
    fn into_config(self) -> Result<ExtractConfig> {
        let mut config = match &self.config {
            Some(path) => ExtractConfig::load_from_file(path)
                .with_context(|| format!("Failed to load configuration: {}", path.display()))?,
            None => ExtractConfig::default(),
        };

        if let Some(source) = self.source {
            config.source_path = source;
        }
        if let Some(destination) = self.destination {
            config.destination_path = Some(destination);
        }
        if let Some(policy) = self.empty_pages {
            config.empty_pages = policy;
        }
        if self.quiet {
            config.echo = false;
        }

        Ok(config)
    }
}

/// Set up logging and tracing on stderr; stdout carries the extracted text
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = cli.into_config()?;
    debug!("Effective configuration: {:?}", config);

    let extractor = Extractor::new(config).context("Invalid configuration")?;
    let source = extractor.config().source_path.clone();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let extracted = extractor
        .run(&mut out)
        .with_context(|| format!("Failed to extract text from {}", source.display()))?;

    info!(
        "Done: {} page(s), {} blank",
        extracted.page_count(),
        extracted.blank_pages().len()
    );
    Ok(())
}
