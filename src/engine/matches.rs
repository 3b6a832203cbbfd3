//! Match records emitted for misspelled words.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::document::Rect;

/// One-based page number, or `"N/A"` for corpus input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRef {
    Number(usize),
    NotAvailable,
}

impl PageRef {
    /// The reference for a zero-based page index.
    pub fn from_index(index: usize) -> Self {
        PageRef::Number(index + 1)
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRef::Number(n) => write!(f, "{n}"),
            PageRef::NotAvailable => f.write_str("N/A"),
        }
    }
}

impl Serialize for PageRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            PageRef::Number(n) => serializer.serialize_u64(*n as u64),
            PageRef::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

impl<'de> Deserialize<'de> for PageRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct PageRefVisitor;

        impl Visitor<'_> for PageRefVisitor {
            type Value = PageRef;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a page number or \"N/A\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<PageRef, E> {
                Ok(PageRef::Number(v as usize))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<PageRef, E> {
                usize::try_from(v)
                    .map(PageRef::Number)
                    .map_err(|_| E::custom("negative page number"))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<PageRef, E> {
                if v == "N/A" {
                    Ok(PageRef::NotAvailable)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(v), &self))
                }
            }
        }

        deserializer.deserialize_any(PageRefVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchData {
    pub language: String,
    pub preprocessed_text: String,
}

/// A word that failed verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// The raw word with stray punctuation removed.
    pub value: String,
    pub misspelled: Vec<String>,
    pub page: PageRef,
    pub coordinates: Option<Rect>,
    pub data: MatchData,
}

/// Verdict for a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellResult {
    pub text: String,
    pub language: String,
    /// Empty when the word is correct, otherwise the word itself.
    pub misspelled: Vec<String>,
}

impl SpellResult {
    pub fn is_correct(&self) -> bool {
        self.misspelled.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ref_serialization() {
        assert_eq!(serde_json::to_string(&PageRef::Number(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&PageRef::NotAvailable).unwrap(), "\"N/A\"");
        assert_eq!(serde_json::from_str::<PageRef>("2").unwrap(), PageRef::Number(2));
        assert_eq!(
            serde_json::from_str::<PageRef>("\"N/A\"").unwrap(),
            PageRef::NotAvailable
        );
        assert!(serde_json::from_str::<PageRef>("\"x\"").is_err());
        assert_eq!(PageRef::from_index(0), PageRef::Number(1));
    }

    #[test]
    fn test_match_shape() {
        let m = Match {
            value: "Zorblax".to_string(),
            misspelled: vec!["zorblax".to_string()],
            page: PageRef::NotAvailable,
            coordinates: None,
            data: MatchData {
                language: "en_US".to_string(),
                preprocessed_text: "zorblax".to_string(),
            },
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["page"], "N/A");
        assert!(json["coordinates"].is_null());
        assert_eq!(json["data"]["preprocessed_text"], "zorblax");
    }
}
