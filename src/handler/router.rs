use indexmap::IndexMap;

use crate::handler::{Handler, responses};
use crate::http::HttpMethod;
use crate::http::request::HttpRequest;
use crate::http::response::HttpResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// `{name}` placeholder matching exactly one path segment.
    Variable(String),
}

struct Route {
    method: HttpMethod,
    segments: Vec<Segment>,
    handler: Box<dyn Handler>,
}

impl Route {
    fn match_path(&self, path: &str) -> Option<IndexMap<String, String>> {
        let parts: Vec<&str> = split_path(path).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = IndexMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Variable(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn parse_pattern(pattern: &str) -> Vec<Segment> {
    split_path(pattern)
        .map(|s| match s.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(name) => Segment::Variable(name.to_string()),
            None => Segment::Literal(s.to_string()),
        })
        .collect()
}

/// Maps `(method, path pattern)` pairs to handlers.
///
/// Routes are tried in registration order. A `HEAD` request falls back to
/// the `GET` route of the same path.
#[derive(Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn route(
        mut self,
        method: HttpMethod,
        pattern: &str,
        handler: impl Handler + 'static,
    ) -> Self {
        self.routes.push(Route {
            method,
            segments: parse_pattern(pattern),
            handler: Box::new(handler),
        });
        self
    }

    pub fn get(self, pattern: &str, handler: impl Handler + 'static) -> Self {
        self.route(HttpMethod::Get, pattern, handler)
    }

    pub fn post(self, pattern: &str, handler: impl Handler + 'static) -> Self {
        self.route(HttpMethod::Post, pattern, handler)
    }

    pub fn put(self, pattern: &str, handler: impl Handler + 'static) -> Self {
        self.route(HttpMethod::Put, pattern, handler)
    }

    pub fn delete(self, pattern: &str, handler: impl Handler + 'static) -> Self {
        self.route(HttpMethod::Delete, pattern, handler)
    }

    fn accepts(route_method: HttpMethod, req_method: HttpMethod) -> bool {
        route_method == req_method
            || (req_method == HttpMethod::Head && route_method == HttpMethod::Get)
    }

    /// Runs the handler matching `req`, storing the path variables on it.
    pub fn dispatch(&self, req: &mut HttpRequest) -> HttpResponse {
        let path = req.path().to_string();
        let mut allowed = Vec::new();

        for route in &self.routes {
            let Some(params) = route.match_path(&path) else {
                continue;
            };
            if Self::accepts(route.method, req.method) {
                req.path_params = params;
                return route.handler.handle(req);
            }
            if !allowed.contains(&route.method) {
                allowed.push(route.method);
            }
        }

        if allowed.is_empty() {
            responses::not_found()
        } else {
            responses::method_not_allowed(&allowed)
        }
    }
}
