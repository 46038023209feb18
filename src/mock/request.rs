//! Request-construction DSL for [`MockMvc::perform`](crate::mock::MockMvc::perform).

use crate::http::HttpMethod;
use crate::http::request::{HttpRequest, RequestHeader};

#[derive(Debug, Clone)]
pub struct MockRequestBuilder {
    request: HttpRequest,
}

impl MockRequestBuilder {
    pub fn new(method: HttpMethod, uri: &str) -> Self {
        Self {
            request: HttpRequest::new(method, uri),
        }
    }

    /// Adds a header value; repeated calls with the same name accumulate.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request.headers.append_raw(name, value);
        self
    }

    pub fn content_type(mut self, content_type: &str) -> Self {
        self.request.set_header(RequestHeader::ContentType, content_type);
        self
    }

    pub fn if_modified_since(mut self, http_date: &str) -> Self {
        self.request.set_header(RequestHeader::IfModifiedSince, http_date);
        self
    }

    pub fn if_none_match(mut self, etag: &str) -> Self {
        self.request.set_header(RequestHeader::IfNoneMatch, etag);
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.request.body = body.into();
        self
    }

    /// Finishes the request, adding `Content-Length` for a non-empty body
    /// unless one was set explicitly.
    pub fn build(self) -> HttpRequest {
        let mut request = self.request;
        let content_length = RequestHeader::ContentLength.as_str();
        if !request.body.is_empty() && !request.headers.contains(content_length) {
            let len = request.body.len().to_string();
            request.set_header(RequestHeader::ContentLength, &len);
        }
        request
    }
}

impl From<MockRequestBuilder> for HttpRequest {
    fn from(builder: MockRequestBuilder) -> Self {
        builder.build()
    }
}

pub fn get(uri: &str) -> MockRequestBuilder {
    MockRequestBuilder::new(HttpMethod::Get, uri)
}

pub fn head(uri: &str) -> MockRequestBuilder {
    MockRequestBuilder::new(HttpMethod::Head, uri)
}

pub fn post(uri: &str) -> MockRequestBuilder {
    MockRequestBuilder::new(HttpMethod::Post, uri)
}

pub fn put(uri: &str) -> MockRequestBuilder {
    MockRequestBuilder::new(HttpMethod::Put, uri)
}

pub fn delete(uri: &str) -> MockRequestBuilder {
    MockRequestBuilder::new(HttpMethod::Delete, uri)
}
