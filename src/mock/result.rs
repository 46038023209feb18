use std::fmt;

use crate::assert::{AssertionFailure, ResultMatcher};
use crate::http::headers::HttpHeaders;
use crate::http::response::HttpResponse;
use crate::http::status::HttpStatus;

/// Immutable snapshot of one dispatched response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedResponse {
    status: HttpStatus,
    headers: HttpHeaders,
    body: Vec<u8>,
}

impl CapturedResponse {
    pub fn new(status: HttpStatus, headers: HttpHeaders, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> HttpStatus {
        self.status
    }

    pub fn headers(&self) -> &HttpHeaders {
        &self.headers
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn header_values(&self, name: &str) -> &[String] {
        self.headers.get_all(name)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

impl From<HttpResponse> for CapturedResponse {
    fn from(res: HttpResponse) -> Self {
        Self::new(res.status, res.headers, res.body)
    }
}

impl fmt::Display for CapturedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP/1.1 {}\r\n{}", self.status, self.headers.stringify())
    }
}

/// Fail-fast chain of expectations over one captured response.
///
/// ```
/// use rustymock::prelude::*;
///
/// let mvc = MockMvc::standalone(Router::new().get("/", |_: &HttpRequest| {
///     HttpResponse::ok().with_header("X-Rate-Limiting", "42")
/// }))
/// .build();
///
/// mvc.perform(get("/"))
///     .and_expect(status().is_ok())?
///     .and_expect(header().long_value("X-Rate-Limiting", 42))?;
/// # Ok::<(), AssertionFailure>(())
/// ```
#[derive(Debug, Clone)]
pub struct ResultActions {
    response: CapturedResponse,
}

impl ResultActions {
    pub(crate) fn new(response: CapturedResponse) -> Self {
        Self { response }
    }

    pub fn and_expect(&self, matcher: impl ResultMatcher) -> Result<&Self, AssertionFailure> {
        if let Err(failure) = matcher.matches(&self.response) {
            tracing::debug!("expectation failed: {failure}");
            return Err(failure);
        }
        Ok(self)
    }

    pub fn response(&self) -> &CapturedResponse {
        &self.response
    }

    pub fn and_return(self) -> CapturedResponse {
        self.response
    }
}
