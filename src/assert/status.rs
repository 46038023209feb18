use crate::assert::ResultMatcher;
use crate::assert::failure::AssertionFailure;
use crate::http::status::HttpStatus;
use crate::mock::CapturedResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAssertion {
    expected: u16,
}

impl ResultMatcher for StatusAssertion {
    fn matches(&self, response: &CapturedResponse) -> Result<(), AssertionFailure> {
        let actual = response.status().code();
        if actual == self.expected {
            return Ok(());
        }
        Err(AssertionFailure::StatusMismatch {
            expected: self.expected,
            actual,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StatusResultMatchers;

impl StatusResultMatchers {
    pub fn is(&self, code: u16) -> StatusAssertion {
        StatusAssertion { expected: code }
    }

    fn status(&self, status: HttpStatus) -> StatusAssertion {
        self.is(status.code())
    }

    pub fn is_ok(&self) -> StatusAssertion {
        self.status(HttpStatus::Ok)
    }

    pub fn is_created(&self) -> StatusAssertion {
        self.status(HttpStatus::Created)
    }

    pub fn is_not_modified(&self) -> StatusAssertion {
        self.status(HttpStatus::NotModified)
    }

    pub fn is_bad_request(&self) -> StatusAssertion {
        self.status(HttpStatus::BadRequest)
    }

    pub fn is_not_found(&self) -> StatusAssertion {
        self.status(HttpStatus::NotFound)
    }

    pub fn is_method_not_allowed(&self) -> StatusAssertion {
        self.status(HttpStatus::MethodNotAllowed)
    }
}
