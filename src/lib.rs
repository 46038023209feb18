//! In-process HTTP mock harness with fluent response assertions.
//!
//! A test registers stand-in handlers on a [`Router`](handler::Router), wraps
//! them in a [`MockMvc`](mock::MockMvc), dispatches described requests without
//! opening a socket and checks the captured response:
//!
//! ```
//! use rustymock::prelude::*;
//!
//! fn show(_: &HttpRequest) -> HttpResponse {
//!     HttpResponse::ok()
//!         .with_last_modified(1_577_836_800_000)
//!         .with_header("X-Rate-Limiting", "42")
//!         .with_header_values("Vary", ["foo", "bar"])
//! }
//!
//! let mvc = MockMvc::standalone(Router::new().get("/persons/{id}", show)).build();
//!
//! mvc.perform(get("/persons/1"))
//!     .and_expect(status().is_ok())?
//!     .and_expect(header().string("Last-Modified", "Wed, 01 Jan 2020 00:00:00 GMT"))?
//!     .and_expect(header().date_value("Last-Modified", 1_577_836_800_000))?
//!     .and_expect(header().long_value("X-Rate-Limiting", 42))?
//!     .and_expect(header().string_values("Vary", ["foo", "bar"]))?
//!     .and_expect(header().does_not_exist("X-Custom-Header"))?;
//!
//! let failure = mvc
//!     .perform(get("/persons/1"))
//!     .and_expect(header().long_value("X-Rate-Limiting", 1))
//!     .unwrap_err();
//! assert_eq!(
//!     failure.to_string(),
//!     "Response header 'X-Rate-Limiting' expected:<1> but was:<42>"
//! );
//! # Ok::<(), AssertionFailure>(())
//! ```

pub mod assert;
pub mod config;
pub mod handler;
pub mod http;
pub mod logging;
pub mod mock;

pub mod prelude {
    pub use crate::assert::matcher::{
        all_of, any_of, contains_exactly, contains_string, ends_with, equal_to, has_items,
        is_empty, not_null_value, null_value, predicate, starts_with, values_predicate,
    };
    pub use crate::assert::{AssertionFailure, ResultMatcher, header, status};
    pub use crate::config::MockConfig;
    pub use crate::handler::{Handler, Router};
    pub use crate::http::HttpMethod;
    pub use crate::http::request::HttpRequest;
    pub use crate::http::response::HttpResponse;
    pub use crate::http::status::HttpStatus;
    pub use crate::mock::{CapturedResponse, MockMvc, delete, get, head, post, put};
}
