//! In-process request dispatcher.
//!
//! [`MockMvc`] replaces a network server in tests: it takes a described
//! request, runs it through the same validate → route → middleware pipeline a
//! server would, and hands back the response as an immutable
//! [`CapturedResponse`] wrapped in [`ResultActions`].
//!
//! ## Request handling flow
//!
//! 1. Build an [`HttpRequest`] from the [`MockRequestBuilder`] and fill in the
//!    default `Host`
//! 2. Validate the request
//!    (delegated to [`http::validator::Validator`](crate::http::validator::Validator))
//! 3. Generate an [`HttpResponse`](crate::http::response::HttpResponse)
//!    (delegated to [`handler::handle_request`](crate::handler::handle_request))
//! 4. Freeze the response into a [`CapturedResponse`]
//!
//! Validation errors result in the matching HTTP error response, exactly as
//! a server would answer them.

mod request;
mod result;

pub use request::{MockRequestBuilder, delete, get, head, post, put};
pub use result::{CapturedResponse, ResultActions};

use crate::config::MockConfig;
use crate::handler::{self, Router};
use crate::http::request::{HttpRequest, RequestHeader};
use crate::http::validator::Validator;

pub struct MockMvc {
    router: Router,
    config: MockConfig,
}

pub struct MockMvcBuilder {
    router: Router,
    config: MockConfig,
}

impl MockMvcBuilder {
    pub fn with_config(mut self, config: MockConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> MockMvc {
        MockMvc {
            router: self.router,
            config: self.config,
        }
    }
}

impl MockMvc {
    /// Sets up a dispatcher around the given routes.
    pub fn standalone(router: Router) -> MockMvcBuilder {
        MockMvcBuilder {
            router,
            config: MockConfig::default(),
        }
    }

    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    pub fn perform(&self, request: impl Into<HttpRequest>) -> ResultActions {
        let mut req = request.into();
        if !req.headers.contains(RequestHeader::Host.as_str()) {
            req.set_header(RequestHeader::Host, &self.config.default_host);
        }

        let response = match Validator::validate_request(&req, &self.config) {
            Ok(()) => handler::handle_request(&self.router, &mut req, &self.config),
            Err(err) => {
                tracing::debug!("rejecting {} {}: {err}", req.method, req.uri);
                handler::handle_error(err.into_http_status(), &req, &self.config)
            }
        };

        tracing::debug!("{} {} -> {}", req.method, req.uri, response.status);
        ResultActions::new(response.into())
    }
}
