//! Page-by-page PDF text extraction.
//!
//! Pages are read in order and each page's text is followed by a blank
//! line (`"\n\n"`), the last page included. Nothing else is done to the
//! text: no trimming, no deduplication, no layout reconstruction.

use crate::config::{EmptyPagePolicy, ExtractConfig};
use crate::document::{Document, PageText};
use crate::error::{ExtractError, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Appended after every page.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Concatenated text of a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    text: String,
    page_count: usize,
    blank_pages: Vec<usize>,
}

impl ExtractedText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of pages that went into the text
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Numbers of pages that had no extractable text
    pub fn blank_pages(&self) -> &[usize] {
        &self.blank_pages
    }

    /// Write the text to `path` as UTF-8, creating or truncating the file.
    ///
    /// If the file cannot be opened it is left untouched; a failure in the
    /// middle of writing can leave it partially written.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let to_write_error = |source| ExtractError::Write {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::create(path).map_err(to_write_error)?;
        file.write_all(self.text.as_bytes()).map_err(to_write_error)?;
        file.flush().map_err(to_write_error)?;

        info!("Wrote {} bytes to {}", self.text.len(), path.display());
        Ok(())
    }
}

impl std::fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Concatenate page texts in order, each followed by [`PAGE_SEPARATOR`].
///
/// Pages are pulled one at a time; the first page error stops the run.
pub fn collect_pages<I>(pages: I, policy: EmptyPagePolicy) -> Result<ExtractedText>
where
    I: IntoIterator<Item = Result<PageText>>,
{
    let mut extracted = ExtractedText::default();

    for page in pages {
        let page = page?;
        let text = match page.text() {
            Some(text) => text,
            None => match policy {
                EmptyPagePolicy::Fail => {
                    return Err(ExtractError::BlankPage {
                        page: page.number(),
                    })
                }
                EmptyPagePolicy::Keep => {
                    warn!("Page {} has no extractable text", page.number());
                    extracted.blank_pages.push(page.number());
                    ""
                }
            },
        };

        debug!("Page {}: {} bytes of text", page.number(), text.len());
        extracted.text.push_str(text);
        extracted.text.push_str(PAGE_SEPARATOR);
        extracted.page_count += 1;
    }

    Ok(extracted)
}

/// Runs one extraction described by an [`ExtractConfig`]
#[derive(Debug, Clone)]
pub struct Extractor {
    config: ExtractConfig,
}

impl Extractor {
    /// Create an extractor; the configuration is validated here
    pub fn new(config: ExtractConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Open the source PDF and concatenate its pages without writing anything
    pub fn extract(&self) -> Result<ExtractedText> {
        let document = Document::open(&self.config.source_path)?;
        let extracted = collect_pages(
            document.pages().map(|page| page.extract_text()),
            self.config.empty_pages,
        )?;

        info!(
            "Extracted {} characters from {}/{} page(s) of {}",
            extracted.as_str().chars().count(),
            extracted.page_count(),
            document.page_count(),
            document.path().display()
        );
        Ok(extracted)
    }

    /// Extract, echo the text to `out`, save it, then confirm on `out`.
    ///
    /// The confirmation names the destination's file name, which is
    /// `extracted_text.txt` unless a destination was configured.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<ExtractedText> {
        let extracted = self.extract()?;

        if self.config.echo {
            writeln!(out, "{}", extracted)?;
        }

        let destination = self.config.destination();
        extracted.write_to(&destination)?;

        let file_name = destination
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| destination.display().to_string());
        writeln!(out, "\n\n=== TEXT SAVED TO {} ===", file_name)?;
        out.flush()?;

        Ok(extracted)
    }
}

/// Extract the text of `source_path` and save it to `destination_path`,
/// echoing it to standard output. Blank pages count as empty text.
pub fn extract_and_save<S, D>(source_path: S, destination_path: D) -> Result<ExtractedText>
where
    S: AsRef<Path>,
    D: AsRef<Path>,
{
    let config = ExtractConfig::new(source_path.as_ref())
        .with_destination(destination_path.as_ref());
    let extractor = Extractor::new(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    extractor.run(&mut out)
}
