//! Documents as seen by the engine.
//!
//! A [`Document`] is an ordered sequence of [`Page`]s; each page yields
//! [`WordBox`]es in the `(x0, y0, x1, y1, text, block, line, word_no)` layout
//! produced by PDF word extraction. Page extraction may fail independently
//! of other pages.

pub mod json;

use serde::{Deserialize, Serialize};

use crate::error::{OrthosError, Result};

/// Word rectangle in page coordinates, with derived fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub width: f64,
    pub height: f64,
    pub is_empty: bool,
    pub is_valid: bool,
    pub is_infinite: bool,
}

impl Rect {
    /// A rectangle from extracted word coordinates.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Rect {
            x0,
            y0,
            x1,
            y1,
            width: x1 - x0,
            height: y1 - y0,
            is_empty: false,
            is_valid: true,
            is_infinite: false,
        }
    }
}

/// One extracted word with its position.
#[derive(Debug, Clone, PartialEq)]
pub struct WordBox {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub text: String,
    pub block_no: u32,
    pub line_no: u32,
    pub word_no: u32,
}

impl WordBox {
    pub fn new<S: Into<String>>(text: S, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        WordBox {
            x0,
            y0,
            x1,
            y1,
            text: text.into(),
            block_no: 0,
            line_no: 0,
            word_no: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x0, self.y0, self.x1, self.y1)
    }
}

/// A page of a document.
pub trait Page {
    /// Zero-based page number.
    fn number(&self) -> usize;

    /// Extract the words of this page.
    fn words(&self) -> Result<Vec<WordBox>>;
}

/// An ordered sequence of pages.
pub trait Document {
    fn page_count(&self) -> usize;

    fn pages(&self) -> Box<dyn Iterator<Item = &dyn Page> + '_>;
}

/// A page held in memory. A page built with [`InMemoryPage::failing`]
/// reports an extraction error instead of words.
#[derive(Debug, Clone)]
pub struct InMemoryPage {
    number: usize,
    words: Vec<WordBox>,
    failure: Option<String>,
}

impl InMemoryPage {
    pub fn new(number: usize, words: Vec<WordBox>) -> Self {
        InMemoryPage {
            number,
            words,
            failure: None,
        }
    }

    /// A page whose text could not be extracted.
    pub fn failing<S: Into<String>>(number: usize, reason: S) -> Self {
        InMemoryPage {
            number,
            words: Vec::new(),
            failure: Some(reason.into()),
        }
    }

    /// A page from plain words laid out on one line.
    pub fn from_text(number: usize, text: &str) -> Self {
        let words = text
            .split_whitespace()
            .enumerate()
            .map(|(i, w)| {
                let x0 = i as f64 * 50.0;
                let mut word = WordBox::new(w, x0, 0.0, x0 + 40.0, 12.0);
                word.word_no = i as u32;
                word
            })
            .collect();
        Self::new(number, words)
    }
}

impl Page for InMemoryPage {
    fn number(&self) -> usize {
        self.number
    }

    fn words(&self) -> Result<Vec<WordBox>> {
        match &self.failure {
            Some(reason) => Err(OrthosError::document(format!(
                "page {}: {reason}",
                self.number
            ))),
            None => Ok(self.words.clone()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    pages: Vec<InMemoryPage>,
}

impl InMemoryDocument {
    pub fn new(pages: Vec<InMemoryPage>) -> Self {
        InMemoryDocument { pages }
    }

    pub fn push(&mut self, page: InMemoryPage) {
        self.pages.push(page);
    }
}

impl Document for InMemoryDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn pages(&self) -> Box<dyn Iterator<Item = &dyn Page> + '_> {
        Box::new(self.pages.iter().map(|p| p as &dyn Page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_derived_fields() {
        let rect = Rect::new(10.0, 20.0, 50.0, 32.0);
        assert_eq!(rect.width, 40.0);
        assert_eq!(rect.height, 12.0);
        assert!(!rect.is_empty);
        assert!(rect.is_valid);
        assert!(!rect.is_infinite);

        let json = serde_json::to_value(rect).unwrap();
        assert_eq!(json["width"], 40.0);
        assert_eq!(json["is_valid"], true);
    }

    #[test]
    fn test_in_memory_document() {
        let doc = InMemoryDocument::new(vec![
            InMemoryPage::from_text(0, "two cats"),
            InMemoryPage::failing(1, "corrupt stream"),
        ]);
        assert_eq!(doc.page_count(), 2);

        let pages: Vec<&dyn Page> = doc.pages().collect();
        let words = pages[0].words().unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text, "cats");
        assert_eq!(words[1].word_no, 1);
        assert!(pages[1].words().is_err());
    }
}
