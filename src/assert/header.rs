//! Header assertion engine.
//!
//! A [`HeaderAssertion`] is one expectation over one response header. It is
//! built through [`HeaderResultMatchers`] (see [`header()`](crate::assert::header)),
//! evaluated once against a [`CapturedResponse`] and dropped. Evaluation is a
//! pure function of the assertion and the response.
//!
//! Absence and mismatch are reported as different [`AssertionFailure`]
//! variants so callers can tell "the header is not there" from "the header
//! has the wrong value".

use crate::assert::ResultMatcher;
use crate::assert::failure::{ABSENT, AssertionFailure};
use crate::assert::matcher::{Expected, ExpectedValues, ValuesMatcher, describe_list};
use crate::http::date;
use crate::mock::CapturedResponse;

#[derive(Debug)]
pub enum HeaderAssertion {
    /// First value equals the literal or satisfies the matcher.
    StringEquals { name: String, expected: Expected },
    /// Full ordered value list equals the literals or satisfies the matcher.
    MultiValueEquals {
        name: String,
        expected: ExpectedValues,
    },
    /// First value is an HTTP-date in the same second as `epoch_millis`.
    DateEquals { name: String, epoch_millis: u64 },
    LongEquals { name: String, expected: i64 },
    Exists { name: String },
    DoesNotExist { name: String },
}

impl HeaderAssertion {
    pub fn name(&self) -> &str {
        match self {
            HeaderAssertion::StringEquals { name, .. }
            | HeaderAssertion::MultiValueEquals { name, .. }
            | HeaderAssertion::DateEquals { name, .. }
            | HeaderAssertion::LongEquals { name, .. }
            | HeaderAssertion::Exists { name }
            | HeaderAssertion::DoesNotExist { name } => name,
        }
    }

    pub fn evaluate(&self, response: &CapturedResponse) -> Result<(), AssertionFailure> {
        tracing::trace!("evaluating {:?}", self);

        match self {
            HeaderAssertion::StringEquals { name, expected } => {
                let actual = response.header(name);
                if expected.matches(actual) {
                    return Ok(());
                }
                Err(AssertionFailure::mismatch(
                    name,
                    expected.describe(),
                    actual.unwrap_or(ABSENT),
                ))
            }
            HeaderAssertion::MultiValueEquals { name, expected } => {
                let actual = response.header_values(name);
                if expected.matches(actual) {
                    return Ok(());
                }
                Err(AssertionFailure::mismatch(
                    name,
                    expected.describe(),
                    describe_list(actual),
                ))
            }
            HeaderAssertion::DateEquals { name, epoch_millis } => {
                let value = required(response, name)?;
                let actual = date::parse_http_date(value).map_err(|_| {
                    AssertionFailure::HeaderDateParseError {
                        name: name.clone(),
                        value: value.to_string(),
                    }
                })?;
                if actual == date::truncate_to_seconds(*epoch_millis) {
                    return Ok(());
                }
                let expected = date::format_http_date(*epoch_millis)
                    .unwrap_or_else(|_| format!("{epoch_millis} ms since epoch"));
                Err(AssertionFailure::mismatch(name, expected, value))
            }
            HeaderAssertion::LongEquals { name, expected } => {
                let value = required(response, name)?;
                let actual = value.trim().parse::<i64>().map_err(|_| {
                    AssertionFailure::HeaderNumberParseError {
                        name: name.clone(),
                        value: value.to_string(),
                    }
                })?;
                if actual == *expected {
                    return Ok(());
                }
                Err(AssertionFailure::mismatch(name, expected.to_string(), value))
            }
            HeaderAssertion::Exists { name } => required(response, name).map(|_| ()),
            HeaderAssertion::DoesNotExist { name } => {
                if response.headers().contains(name) {
                    return Err(AssertionFailure::HeaderPresent { name: name.clone() });
                }
                Ok(())
            }
        }
    }
}

fn required<'a>(response: &'a CapturedResponse, name: &str) -> Result<&'a str, AssertionFailure> {
    response
        .header(name)
        .ok_or_else(|| AssertionFailure::HeaderMissing {
            name: name.to_string(),
        })
}

impl ResultMatcher for HeaderAssertion {
    fn matches(&self, response: &CapturedResponse) -> Result<(), AssertionFailure> {
        self.evaluate(response)
    }
}

/// Factory for [`HeaderAssertion`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderResultMatchers;

impl HeaderResultMatchers {
    /// First value equals a literal, or satisfies a
    /// [`ValueMatcher`](crate::assert::matcher::ValueMatcher).
    ///
    /// The matcher sees `None` when the header is absent, so `null_value()`
    /// asserts absence.
    pub fn string(&self, name: &str, expected: impl Into<Expected>) -> HeaderAssertion {
        HeaderAssertion::StringEquals {
            name: name.to_string(),
            expected: expected.into(),
        }
    }

    /// All values equal `values`, in order. With no values this asserts the
    /// header is absent.
    pub fn string_values(
        &self,
        name: &str,
        values: impl Into<ExpectedValues>,
    ) -> HeaderAssertion {
        HeaderAssertion::MultiValueEquals {
            name: name.to_string(),
            expected: values.into(),
        }
    }

    /// The ordered value list satisfies `matcher`. An absent header is
    /// offered to the matcher as an empty list.
    pub fn string_values_matching(
        &self,
        name: &str,
        matcher: Box<dyn ValuesMatcher>,
    ) -> HeaderAssertion {
        self.string_values(name, ExpectedValues::Matcher(matcher))
    }

    /// Shorthand for [`string_values`](Self::string_values) with no values.
    pub fn no_values(&self, name: &str) -> HeaderAssertion {
        self.string_values(name, ExpectedValues::Values(Vec::new()))
    }

    pub fn date_value(&self, name: &str, epoch_millis: u64) -> HeaderAssertion {
        HeaderAssertion::DateEquals {
            name: name.to_string(),
            epoch_millis,
        }
    }

    pub fn long_value(&self, name: &str, expected: i64) -> HeaderAssertion {
        HeaderAssertion::LongEquals {
            name: name.to_string(),
            expected,
        }
    }

    pub fn exists(&self, name: &str) -> HeaderAssertion {
        HeaderAssertion::Exists {
            name: name.to_string(),
        }
    }

    pub fn does_not_exist(&self, name: &str) -> HeaderAssertion {
        HeaderAssertion::DoesNotExist {
            name: name.to_string(),
        }
    }
}
