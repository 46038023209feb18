/// Rendering of a missing header value in mismatch messages.
pub const ABSENT: &str = "null";

/// Why an expectation over a [`CapturedResponse`](crate::mock::CapturedResponse)
/// did not hold.
///
/// The rendered messages are stable: callers assert on substrings such as
/// `Response header 'X'` and `Response does not contain header 'X'`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssertionFailure {
    #[error("Response does not contain header '{name}'")]
    HeaderMissing { name: String },

    #[error("Response should not contain header '{name}'")]
    HeaderPresent { name: String },

    #[error("Response header '{name}' expected:<{expected}> but was:<{actual}>")]
    HeaderMismatch {
        name: String,
        expected: String,
        actual: String,
    },

    #[error("Response header '{name}'='{value}' is not a valid HTTP-date")]
    HeaderDateParseError { name: String, value: String },

    #[error("Response header '{name}'='{value}' is not a valid integer")]
    HeaderNumberParseError { name: String, value: String },

    #[error("Status expected:<{expected}> but was:<{actual}>")]
    StatusMismatch { expected: u16, actual: u16 },

    /// Raised by closure-based matchers.
    #[error("{0}")]
    Custom(String),
}

impl AssertionFailure {
    pub fn mismatch(name: &str, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        AssertionFailure::HeaderMismatch {
            name: name.to_string(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Header the failure is about, if any.
    pub fn header_name(&self) -> Option<&str> {
        match self {
            AssertionFailure::HeaderMissing { name }
            | AssertionFailure::HeaderPresent { name }
            | AssertionFailure::HeaderMismatch { name, .. }
            | AssertionFailure::HeaderDateParseError { name, .. }
            | AssertionFailure::HeaderNumberParseError { name, .. } => Some(name),
            AssertionFailure::StatusMismatch { .. } | AssertionFailure::Custom(_) => None,
        }
    }
}
