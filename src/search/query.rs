use reqwest::Url;

/// Query-string pairs identifying a search request.
///
/// Parsed verbatim from the page location: percent-decoded, order and
/// duplicate keys preserved, nothing validated or typed. Every pair is
/// forwarded to the search endpoint untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pairs: Vec<(String, String)>,
}

impl SearchQuery {
    /// Parse a raw query string, with or without a leading `?`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim().trim_start_matches('?');
        if raw.is_empty() {
            return Self::default();
        }

        // Lean on the URL parser for percent-decoding instead of rolling our
        // own; a string that will not even parse as a query yields no pairs.
        let pairs = match Url::parse(&format!("http://localhost/?{raw}")) {
            Ok(url) => url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
            Err(_) => Vec::new(),
        };

        Self { pairs }
    }

    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// First value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Search category from the `type` key. Contact requests are tagged with
    /// this even if the user has since re-sorted or switched views.
    pub fn search_type(&self) -> &str {
        self.get("type").unwrap_or("buy")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pairs_in_order() {
        let q = SearchQuery::parse("type=rent&location=Dhaka&monthly_rent=20000");
        let pairs: Vec<_> = q.pairs().collect();
        assert_eq!(
            pairs,
            vec![
                ("type", "rent"),
                ("location", "Dhaka"),
                ("monthly_rent", "20000"),
            ]
        );
    }

    #[test]
    fn empty_and_question_mark_only_are_empty() {
        assert!(SearchQuery::parse("").is_empty());
        assert!(SearchQuery::parse("?").is_empty());
        assert!(SearchQuery::parse("  ").is_empty());
    }

    #[test]
    fn percent_decodes_values() {
        let q = SearchQuery::parse("?location=Cox%27s%20Bazar");
        assert_eq!(q.get("location"), Some("Cox's Bazar"));
    }

    #[test]
    fn duplicate_keys_are_kept_and_get_returns_first() {
        let q = SearchQuery::parse("tag=a&tag=b");
        assert_eq!(q.pairs().count(), 2);
        assert_eq!(q.get("tag"), Some("a"));
    }

    #[test]
    fn search_type_defaults_to_buy() {
        assert_eq!(SearchQuery::parse("location=Dhaka").search_type(), "buy");
        assert_eq!(SearchQuery::parse("type=rent").search_type(), "rent");
    }
}
