use super::CharFilter;

/// A char filter applying literal replacements in insertion order.
///
/// Later pairs see the output of earlier ones, so `[("€.", "€ ."), ("€", "")]`
/// first separates and then drops the symbol.
pub struct MappingCharFilter {
    replacements: Vec<(String, String)>,
}

impl MappingCharFilter {
    pub fn new<I, K, V>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let replacements = mapping
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        Self { replacements }
    }

    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        self.replacements
            .iter()
            .fold(input.to_string(), |text, (from, to)| {
                if text.contains(from.as_str()) {
                    text.replace(from.as_str(), to)
                } else {
                    text
                }
            })
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping() {
        let filter = MappingCharFilter::new([("\u{201c}", "\""), ("\u{201d}", "\"")]);
        assert_eq!(filter.filter("\u{201c}quoted\u{201d}"), "\"quoted\"");
    }

    #[test]
    fn test_mapping_is_ordered() {
        let filter = MappingCharFilter::new([("€.", "€ ."), ("€", "")]);
        assert_eq!(filter.filter("10€."), "10 .");
    }

    #[test]
    fn test_empty_keys_are_ignored() {
        let filter = MappingCharFilter::new([("", "x"), ("a", "b")]);
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.filter("aa"), "bb");
    }
}
