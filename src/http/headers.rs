//! HTTP headers abstraction for [`HttpRequest`](crate::http::request::HttpRequest),
//! [`HttpResponse`](crate::http::response::HttpResponse) and
//! [`CapturedResponse`](crate::mock::CapturedResponse).
//!
//! Headers are stored in an ordered map to preserve insertion order. Names are
//! matched case-insensitively, but the casing used on first insertion is kept
//! for display. Every name maps to an ordered list of values, so multi-valued
//! headers such as `Vary` keep each value separately.
//!
//! A header that was never set is distinguishable from a header set to the
//! empty string: [`HttpHeaders::get`] returns `None` for the former and
//! `Some("")` for the latter.
//!
//! This abstraction does not enforce any HTTP semantics; that is left to the
//! [`validator`](crate::http::validator) and to the handler pipeline.

use indexmap::IndexMap;

use crate::http::date::{self, HttpDateError};

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderEntry {
    name: String,
    values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpHeaders {
    headers: IndexMap<String, HeaderEntry>,
}

impl HttpHeaders {
    pub fn new() -> Self {
        Self {
            headers: IndexMap::new(),
        }
    }

    fn key(name: &str) -> String {
        name.to_ascii_lowercase()
    }

    /// Sets `name` to a single value, replacing any previous values.
    pub fn set_raw(&mut self, name: &str, value: &str) {
        let entry = self
            .headers
            .entry(Self::key(name))
            .or_insert_with(|| HeaderEntry {
                name: name.to_string(),
                values: Vec::new(),
            });
        entry.values.clear();
        entry.values.push(value.to_string());
    }

    /// Adds a value to `name`, keeping the values already present.
    pub fn append_raw(&mut self, name: &str, value: &str) {
        self.headers
            .entry(Self::key(name))
            .or_insert_with(|| HeaderEntry {
                name: name.to_string(),
                values: Vec::new(),
            })
            .values
            .push(value.to_string());
    }

    /// First value of `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&Self::key(name))
            .and_then(|entry| entry.values.first())
            .map(String::as_str)
    }

    /// All values of `name` in insertion order, empty when absent.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.headers
            .get(&Self::key(name))
            .map(|entry| entry.values.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.contains_key(&Self::key(name))
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.headers
            .shift_remove(&Self::key(name))
            .map(|entry| entry.values)
    }

    /// Sets `name` to the HTTP-date rendering of `epoch_millis`.
    pub fn set_date(&mut self, name: &str, epoch_millis: u64) -> Result<(), HttpDateError> {
        let value = date::format_http_date(epoch_millis)?;
        self.set_raw(name, &value);
        Ok(())
    }

    /// Parses the first value of `name` as an HTTP-date, in epoch milliseconds.
    pub fn get_date(&self, name: &str) -> Option<Result<u64, HttpDateError>> {
        self.get(name).map(date::parse_http_date)
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterates over `(name, values)` pairs using the original name casing.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.headers
            .values()
            .map(|entry| (entry.name.as_str(), entry.values.as_slice()))
    }

    pub fn stringify(&self) -> String {
        let mut result = String::new();
        for (name, values) in self.iter() {
            for value in values {
                result.push_str(&format!("{}: {}\r\n", name, value));
            }
        }
        result
    }
}
