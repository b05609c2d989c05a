//! PDF documents opened for text extraction.

use crate::error::{ExtractError, Result};
use pdf_extract::PlainTextOutput;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// An opened PDF document.
///
/// The source file is read once and its handle closed before parsing;
/// the parsed document is owned memory released when the value is dropped.
/// Page text is only produced when a [`Page`] is asked for it.
#[derive(Debug)]
pub struct Document {
    path: PathBuf,
    inner: pdf_extract::Document,
    page_ids: Vec<u32>,
}

impl Document {
    /// Open and parse the PDF at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening PDF {}", path.display());

        let bytes = fs::read(path).map_err(|source| ExtractError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_bytes(path, &bytes)
    }

    /// Parse a PDF already held in memory; `path` is only used in messages
    pub fn from_bytes<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!("Parsing {} ({} bytes)", path.display(), bytes.len());

        let to_parse_error = |e: &dyn std::fmt::Display| ExtractError::Parse {
            path: path.clone(),
            reason: e.to_string(),
        };

        let mut inner = pdf_extract::Document::load_mem(bytes).map_err(|e| to_parse_error(&e))?;
        if inner.is_encrypted() {
            // Only documents readable with the empty user password are supported.
            inner.decrypt("").map_err(|e| to_parse_error(&e))?;
        }

        let page_ids: Vec<u32> = inner.get_pages().keys().copied().collect();

        info!("Loaded {} page(s) from {}", page_ids.len(), path.display());
        Ok(Self {
            path,
            inner,
            page_ids,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Pages in document order
    pub fn pages(&self) -> impl Iterator<Item = Page<'_>> {
        self.page_ids
            .iter()
            .enumerate()
            .map(move |(index, &page_id)| Page {
                document: self,
                number: index + 1,
                page_id,
            })
    }
}

/// One page of a [`Document`]
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    document: &'a Document,
    number: usize,
    page_id: u32,
}

impl Page<'_> {
    /// 1-based page number
    pub fn number(&self) -> usize {
        self.number
    }

    /// Run the text layout for this page.
    pub fn extract_text(&self) -> Result<PageText> {
        let mut raw = String::new();
        {
            let mut output = PlainTextOutput::new(&mut raw);
            pdf_extract::output_doc_page(&self.document.inner, &mut output, self.page_id)
                .map_err(|e| ExtractError::Page {
                    page: self.number,
                    reason: e.to_string(),
                })?;
        }

        Ok(PageText::new(self.number, strip_layout_prefix(&raw)))
    }
}

/// The plain-text layout breaks lines before the first glyph of every page
/// because it starts with no previous position; those breaks are not text.
fn strip_layout_prefix(raw: &str) -> &str {
    raw.trim_start_matches('\n')
}

/// Text extracted from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    number: usize,
    raw: String,
}

impl PageText {
    pub fn new<S: Into<String>>(number: usize, raw: S) -> Self {
        Self {
            number,
            raw: raw.into(),
        }
    }

    /// 1-based page number
    pub fn number(&self) -> usize {
        self.number
    }

    /// The page text, or `None` when the page has nothing but whitespace.
    pub fn text(&self) -> Option<&str> {
        if self.raw.trim().is_empty() {
            None
        } else {
            Some(&self.raw)
        }
    }
}
