//! Query-string assembly for list endpoints.
//!
//! Parameters are kept in insertion order and only defined values are pushed,
//! so an unset filter never reaches the wire.

use reqwest::Url;
use std::fmt::Display;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl Display) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    pub fn push_opt<T: Display>(&mut self, key: &str, value: Option<T>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Push `value` unless it is empty or whitespace.
    pub fn push_non_empty(&mut self, key: &str, value: &str) {
        if !value.trim().is_empty() {
            self.push(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Form-encoded representation, without the leading `?`.
    pub fn encode(&self) -> String {
        let mut url = match Url::parse("http://query.local/") {
            Ok(url) => url,
            Err(_) => return String::new(),
        };
        if !self.pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(self.pairs.iter());
        }
        url.query().unwrap_or_default().to_string()
    }
}
