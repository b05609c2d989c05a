//! PDF Text Extractor Library
//!
//! Opens a PDF, extracts the text of each page in order, joins the pages
//! with blank lines and saves the result as a UTF-8 text file.

pub mod config;
pub mod document;
pub mod error;
pub mod extractor;

pub use config::{EmptyPagePolicy, ExtractConfig};
pub use document::{Document, Page, PageText};
pub use error::{ExtractError, Result};
pub use extractor::{collect_pages, extract_and_save, ExtractedText, Extractor};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        config::{EmptyPagePolicy, ExtractConfig},
        document::{Document, Page, PageText},
        error::{ExtractError, Result},
        extractor::{extract_and_save, ExtractedText, Extractor},
    };

    pub use tracing::{debug, error, info, warn};
}
