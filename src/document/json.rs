//! JSON page dumps.
//!
//! ```json
//! {"pages": [{"number": 0, "words": [[72.0, 90.5, 110.2, 102.0, "Their", 0, 0, 0]]}]}
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::document::{InMemoryDocument, InMemoryPage, WordBox};
use crate::error::{OrthosError, Result};

#[derive(Debug, Deserialize)]
struct RawWord(f64, f64, f64, f64, String, u32, u32, u32);

#[derive(Debug, Deserialize)]
struct RawPage {
    number: Option<usize>,
    #[serde(default)]
    words: Vec<RawWord>,
    /// Extraction error recorded by the producer.
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    pages: Vec<RawPage>,
}

impl From<RawWord> for WordBox {
    fn from(raw: RawWord) -> Self {
        let RawWord(x0, y0, x1, y1, text, block_no, line_no, word_no) = raw;
        WordBox {
            x0,
            y0,
            x1,
            y1,
            text,
            block_no,
            line_no,
            word_no,
        }
    }
}

/// Parse a JSON page dump. Pages without a number are numbered by position.
pub fn parse_document(input: &str) -> Result<InMemoryDocument> {
    let raw: RawDocument = serde_json::from_str(input)
        .map_err(|e| OrthosError::document(format!("Invalid document JSON: {e}")))?;

    let pages = raw
        .pages
        .into_iter()
        .enumerate()
        .map(|(i, page)| {
            let number = page.number.unwrap_or(i);
            match page.error {
                Some(reason) => InMemoryPage::failing(number, reason),
                None => InMemoryPage::new(number, page.words.into_iter().map(WordBox::from).collect()),
            }
        })
        .collect();

    Ok(InMemoryDocument::new(pages))
}

pub fn load_document<P: AsRef<Path>>(path: P) -> Result<InMemoryDocument> {
    parse_document(&fs::read_to_string(path)?)
}
