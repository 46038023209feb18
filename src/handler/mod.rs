//! Request handling pipeline of the mock dispatcher.
//!
//! A request that passed validation is routed to a [`Handler`], then the
//! response goes through the [`middleware`] chain. Requests that failed
//! validation get a canned error response from [`responses`] and go through
//! the same chain.

mod middleware;
pub mod responses;
pub mod router;

pub use router::Router;

use crate::config::MockConfig;
use crate::http::request::HttpRequest;
use crate::http::response::HttpResponse;
use crate::http::status::HttpStatus;

/// Stand-in controller producing a response for a routed request.
pub trait Handler: Send + Sync {
    fn handle(&self, req: &HttpRequest) -> HttpResponse;
}

impl<F> Handler for F
where
    F: Fn(&HttpRequest) -> HttpResponse + Send + Sync,
{
    fn handle(&self, req: &HttpRequest) -> HttpResponse {
        self(req)
    }
}

pub fn handle_request(router: &Router, req: &mut HttpRequest, config: &MockConfig) -> HttpResponse {
    let mut res = router.dispatch(req);
    middleware::apply(req, &mut res, config);
    res
}

pub fn handle_error(err: HttpStatus, req: &HttpRequest, config: &MockConfig) -> HttpResponse {
    let mut res = responses::any_error(err);
    middleware::apply(req, &mut res, config);
    res
}
