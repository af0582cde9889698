// src/params.rs
//
// Query strings and urlencoded form bodies share one lookup type.

use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// Parse `a=1&b=two` (query string or x-www-form-urlencoded body).
    pub fn parse(raw: &str) -> Self {
        let pairs = url::form_urlencoded::parse(raw.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    pub fn from_request(req: &astra::Request) -> Self {
        req.uri().query().map(Self::parse).unwrap_or_default()
    }

    /// First value for `key`, trimmed; empty values count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Parsed value for `key`; values that fail to parse count as absent.
    pub fn parse_as<T: FromStr>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|v| v.parse().ok())
    }

    /// Checkbox-style toggle.
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some("1" | "true" | "on" | "yes"))
    }

    /// Required form field; missing or blank is a 400.
    pub fn require(&self, key: &str) -> Result<&str, crate::errors::ServerError> {
        self.get(key)
            .ok_or_else(|| crate::errors::ServerError::BadRequest(format!("missing field '{key}'")))
    }

    /// Re-encode the pairs, replacing `key` with `value` (used for "load more" links).
    pub fn with(&self, key: &str, value: &str) -> String {
        let mut ser = url::form_urlencoded::Serializer::new(String::new());
        for (k, v) in self.pairs.iter().filter(|(k, _)| k != key) {
            ser.append_pair(k, v);
        }
        ser.append_pair(key, value);
        ser.finish()
    }

    /// Re-encode the pairs as given, minus `key`.
    pub fn without(&self, key: &str) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().filter(|(k, _)| k != key))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_and_trims() {
        let p = Params::parse("q=palm+jumeirah&priceMin=%201000000%20&empty=&type=villa");
        assert_eq!(p.get("q"), Some("palm jumeirah"));
        assert_eq!(p.parse_as::<u64>("priceMin"), Some(1_000_000));
        assert_eq!(p.get("empty"), None);
        assert_eq!(p.get("missing"), None);
    }

    #[test]
    fn malformed_numbers_are_absent() {
        let p = Params::parse("priceMin=cheap&priceMax=-5");
        assert_eq!(p.parse_as::<u64>("priceMin"), None);
        assert_eq!(p.parse_as::<u64>("priceMax"), None);
    }

    #[test]
    fn flags_and_required() {
        let p = Params::parse("superAgent=on&name=Lina");
        assert!(p.flag("superAgent"));
        assert!(!p.flag("verified"));
        assert_eq!(p.require("name").unwrap(), "Lina");
        assert!(p.require("email").is_err());
    }

    #[test]
    fn with_replaces_key() {
        let p = Params::parse("purpose=rent&limit=12");
        assert_eq!(p.with("limit", "24"), "purpose=rent&limit=24");
        assert_eq!(p.without("limit"), "purpose=rent");
        assert_eq!(Params::default().without("limit"), "");
    }
}
