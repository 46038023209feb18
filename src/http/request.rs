use indexmap::IndexMap;

use crate::http::HttpMethod;
use crate::http::headers::HttpHeaders;

/// Common HTTP request headers
/// This enum defines the set of headers that can be explicitly set on an
/// [`HttpRequest`] through its typed wrapper API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestHeader {
    Host,
    ContentLength,
    ContentType,
    IfModifiedSince,
    IfNoneMatch,
}

impl RequestHeader {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestHeader::Host => "Host",
            RequestHeader::ContentLength => "Content-Length",
            RequestHeader::ContentType => "Content-Type",
            RequestHeader::IfModifiedSince => "If-Modified-Since",
            RequestHeader::IfNoneMatch => "If-None-Match",
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub uri: String,
    pub http_version: (u8, u8),

    pub headers: HttpHeaders,
    pub body: Vec<u8>,

    /// Filled in by the router from `{name}` segments of the matched route.
    pub path_params: IndexMap<String, String>,
}

impl HttpRequest {
    pub fn new(method: HttpMethod, uri: &str) -> Self {
        Self {
            method,
            uri: uri.to_string(),
            http_version: (1, 1),
            headers: HttpHeaders::new(),
            body: Vec::new(),
            path_params: IndexMap::new(),
        }
    }

    /// Sets a request header constrained to the [`RequestHeader`] variants.
    ///
    /// No validation is performed on the header value itself.
    pub fn set_header(&mut self, h: RequestHeader, value: &str) {
        self.headers.set_raw(h.as_str(), value);
    }

    /// The URI without its query string.
    pub fn path(&self) -> &str {
        self.uri
            .split_once('?')
            .map(|(path, _)| path)
            .unwrap_or(&self.uri)
    }

    pub fn query(&self) -> Option<&str> {
        self.uri.split_once('?').map(|(_, query)| query)
    }

    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }
}
