//! Composable predicates used in place of literal expected values.
//!
//! [`ValueMatcher`]s look at a single header value, which may be absent;
//! [`ValuesMatcher`]s look at the whole ordered list of values of a header.
//! Constructors return boxed trait objects so matchers nest freely:
//!
//! ```
//! use rustymock::assert::matcher::*;
//!
//! let vary = has_items(vec![contains_string("foo"), starts_with("bar")]);
//! assert!(vary.matches(&["foo".to_string(), "bar".to_string()]));
//! ```
//!
//! [`Expected`] and [`ExpectedValues`] are the value-or-matcher sum types the
//! header assertions accept; literals and boxed matchers both convert into
//! them.

use std::fmt;

pub trait ValueMatcher: Send + Sync {
    fn matches(&self, actual: Option<&str>) -> bool;

    /// Human-readable description of what is expected.
    fn describe(&self) -> String;
}

pub trait ValuesMatcher: Send + Sync {
    fn matches(&self, actual: &[String]) -> bool;

    fn describe(&self) -> String;
}

impl fmt::Debug for dyn ValueMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for dyn ValuesMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

pub(crate) fn describe_list(values: &[String]) -> String {
    format!("[{}]", values.join(", "))
}

struct EqualTo(String);

impl ValueMatcher for EqualTo {
    fn matches(&self, actual: Option<&str>) -> bool {
        actual == Some(self.0.as_str())
    }

    fn describe(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

#[derive(Clone, Copy)]
enum TextOp {
    Contains,
    StartsWith,
    EndsWith,
}

struct Text {
    op: TextOp,
    needle: String,
}

impl ValueMatcher for Text {
    fn matches(&self, actual: Option<&str>) -> bool {
        let Some(actual) = actual else {
            return false;
        };
        match self.op {
            TextOp::Contains => actual.contains(&self.needle),
            TextOp::StartsWith => actual.starts_with(&self.needle),
            TextOp::EndsWith => actual.ends_with(&self.needle),
        }
    }

    fn describe(&self) -> String {
        let verb = match self.op {
            TextOp::Contains => "containing",
            TextOp::StartsWith => "starting with",
            TextOp::EndsWith => "ending with",
        };
        format!("a string {} \"{}\"", verb, self.needle)
    }
}

struct Presence(bool);

impl ValueMatcher for Presence {
    fn matches(&self, actual: Option<&str>) -> bool {
        actual.is_some() == self.0
    }

    fn describe(&self) -> String {
        let description = if self.0 { "not null" } else { "null" };
        description.to_string()
    }
}

struct Combined {
    all: bool,
    matchers: Vec<Box<dyn ValueMatcher>>,
}

impl ValueMatcher for Combined {
    fn matches(&self, actual: Option<&str>) -> bool {
        if self.all {
            self.matchers.iter().all(|m| m.matches(actual))
        } else {
            self.matchers.iter().any(|m| m.matches(actual))
        }
    }

    fn describe(&self) -> String {
        let sep = if self.all { " and " } else { " or " };
        let parts: Vec<String> = self.matchers.iter().map(|m| m.describe()).collect();
        format!("({})", parts.join(sep))
    }
}

struct Predicate<F> {
    description: String,
    f: F,
}

impl<F> ValueMatcher for Predicate<F>
where
    F: Fn(Option<&str>) -> bool + Send + Sync,
{
    fn matches(&self, actual: Option<&str>) -> bool {
        (self.f)(actual)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }
}

impl<F> ValuesMatcher for Predicate<F>
where
    F: Fn(&[String]) -> bool + Send + Sync,
{
    fn matches(&self, actual: &[String]) -> bool {
        (self.f)(actual)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }
}

pub fn equal_to(expected: impl Into<String>) -> Box<dyn ValueMatcher> {
    Box::new(EqualTo(expected.into()))
}

pub fn contains_string(needle: impl Into<String>) -> Box<dyn ValueMatcher> {
    Box::new(Text {
        op: TextOp::Contains,
        needle: needle.into(),
    })
}

pub fn starts_with(prefix: impl Into<String>) -> Box<dyn ValueMatcher> {
    Box::new(Text {
        op: TextOp::StartsWith,
        needle: prefix.into(),
    })
}

pub fn ends_with(suffix: impl Into<String>) -> Box<dyn ValueMatcher> {
    Box::new(Text {
        op: TextOp::EndsWith,
        needle: suffix.into(),
    })
}

/// Matches an absent value only.
pub fn null_value() -> Box<dyn ValueMatcher> {
    Box::new(Presence(false))
}

pub fn not_null_value() -> Box<dyn ValueMatcher> {
    Box::new(Presence(true))
}

pub fn all_of(matchers: Vec<Box<dyn ValueMatcher>>) -> Box<dyn ValueMatcher> {
    Box::new(Combined {
        all: true,
        matchers,
    })
}

pub fn any_of(matchers: Vec<Box<dyn ValueMatcher>>) -> Box<dyn ValueMatcher> {
    Box::new(Combined {
        all: false,
        matchers,
    })
}

pub fn predicate<F>(description: impl Into<String>, f: F) -> Box<dyn ValueMatcher>
where
    F: Fn(Option<&str>) -> bool + Send + Sync + 'static,
{
    Box::new(Predicate {
        description: description.into(),
        f,
    })
}

struct HasItems(Vec<Box<dyn ValueMatcher>>);

impl ValuesMatcher for HasItems {
    fn matches(&self, actual: &[String]) -> bool {
        self.0
            .iter()
            .all(|m| actual.iter().any(|value| m.matches(Some(value.as_str()))))
    }

    fn describe(&self) -> String {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|m| format!("a collection containing {}", m.describe()))
            .collect();
        format!("({})", parts.join(" and "))
    }
}

struct ContainsExactly(Vec<String>);

impl ValuesMatcher for ContainsExactly {
    fn matches(&self, actual: &[String]) -> bool {
        self.0.as_slice() == actual
    }

    fn describe(&self) -> String {
        describe_list(&self.0)
    }
}

/// Every sub-matcher must be satisfied by at least one value.
pub fn has_items(matchers: Vec<Box<dyn ValueMatcher>>) -> Box<dyn ValuesMatcher> {
    Box::new(HasItems(matchers))
}

/// The values must equal `expected`, in order.
pub fn contains_exactly<I, S>(expected: I) -> Box<dyn ValuesMatcher>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Box::new(ContainsExactly(expected.into_iter().map(Into::into).collect()))
}

pub fn is_empty() -> Box<dyn ValuesMatcher> {
    Box::new(ContainsExactly(Vec::new()))
}

pub fn values_predicate<F>(description: impl Into<String>, f: F) -> Box<dyn ValuesMatcher>
where
    F: Fn(&[String]) -> bool + Send + Sync + 'static,
{
    Box::new(Predicate {
        description: description.into(),
        f,
    })
}

/// A literal value or a matcher, evaluated uniformly.
#[derive(Debug)]
pub enum Expected {
    Value(String),
    Matcher(Box<dyn ValueMatcher>),
}

impl Expected {
    pub fn matches(&self, actual: Option<&str>) -> bool {
        match self {
            Expected::Value(expected) => actual == Some(expected.as_str()),
            Expected::Matcher(matcher) => matcher.matches(actual),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Expected::Value(expected) => expected.clone(),
            Expected::Matcher(matcher) => matcher.describe(),
        }
    }
}

impl From<&str> for Expected {
    fn from(value: &str) -> Self {
        Expected::Value(value.to_string())
    }
}

impl From<String> for Expected {
    fn from(value: String) -> Self {
        Expected::Value(value)
    }
}

impl From<&String> for Expected {
    fn from(value: &String) -> Self {
        Expected::Value(value.clone())
    }
}

impl From<Box<dyn ValueMatcher>> for Expected {
    fn from(matcher: Box<dyn ValueMatcher>) -> Self {
        Expected::Matcher(matcher)
    }
}

/// An ordered list of literal values or an aggregate matcher.
#[derive(Debug)]
pub enum ExpectedValues {
    Values(Vec<String>),
    Matcher(Box<dyn ValuesMatcher>),
}

impl ExpectedValues {
    pub fn matches(&self, actual: &[String]) -> bool {
        match self {
            ExpectedValues::Values(expected) => expected.as_slice() == actual,
            ExpectedValues::Matcher(matcher) => matcher.matches(actual),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ExpectedValues::Values(expected) => describe_list(expected),
            ExpectedValues::Matcher(matcher) => matcher.describe(),
        }
    }
}

impl From<Vec<String>> for ExpectedValues {
    fn from(values: Vec<String>) -> Self {
        ExpectedValues::Values(values)
    }
}

impl From<Vec<&str>> for ExpectedValues {
    fn from(values: Vec<&str>) -> Self {
        ExpectedValues::Values(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ExpectedValues {
    fn from(values: [&str; N]) -> Self {
        ExpectedValues::Values(values.iter().map(|v| v.to_string()).collect())
    }
}

impl From<Box<dyn ValuesMatcher>> for ExpectedValues {
    fn from(matcher: Box<dyn ValuesMatcher>) -> Self {
        ExpectedValues::Matcher(matcher)
    }
}
