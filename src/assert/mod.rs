//! Expectations over a [`CapturedResponse`].
//!
//! Everything that can be passed to
//! [`ResultActions::and_expect`](crate::mock::ResultActions::and_expect)
//! implements [`ResultMatcher`]: header assertions from [`header()`], status
//! assertions from [`status()`], and plain closures.

pub mod failure;
pub mod header;
pub mod matcher;
pub mod status;

pub use failure::AssertionFailure;
pub use header::{HeaderAssertion, HeaderResultMatchers};
pub use status::{StatusAssertion, StatusResultMatchers};

use crate::mock::CapturedResponse;

pub trait ResultMatcher {
    fn matches(&self, response: &CapturedResponse) -> Result<(), AssertionFailure>;
}

impl<F> ResultMatcher for F
where
    F: Fn(&CapturedResponse) -> Result<(), AssertionFailure>,
{
    fn matches(&self, response: &CapturedResponse) -> Result<(), AssertionFailure> {
        self(response)
    }
}

pub fn header() -> HeaderResultMatchers {
    HeaderResultMatchers
}

pub fn status() -> StatusResultMatchers {
    StatusResultMatchers
}
