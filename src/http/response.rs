use crate::http::headers::HttpHeaders;
use crate::http::status::HttpStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseHeader {
    ContentLength,
    ContentType,
    Server,
    LastModified,
    ETag,
}

impl ResponseHeader {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseHeader::ContentType => "Content-Type",
            ResponseHeader::ContentLength => "Content-Length",
            ResponseHeader::Server => "Server",
            ResponseHeader::LastModified => "Last-Modified",
            ResponseHeader::ETag => "ETag",
        }
    }
}

/// Response under construction by a handler and the middleware chain.
///
/// Once dispatch is over it is frozen into a
/// [`CapturedResponse`](crate::mock::CapturedResponse).
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: HttpStatus,
    pub headers: HttpHeaders,
    pub body: Vec<u8>,
}

impl Default for HttpResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpResponse {
    pub fn new() -> Self {
        Self {
            status: HttpStatus::Ok,
            headers: HttpHeaders::new(),
            body: Vec::new(),
        }
    }

    pub fn ok() -> Self {
        Self::new()
    }

    pub fn with_status(status: HttpStatus) -> Self {
        Self {
            status,
            ..Self::new()
        }
    }

    pub fn set_header(&mut self, h: ResponseHeader, value: &str) {
        self.headers.set_raw(h.as_str(), value);
    }

    /// Adds `name: value`, keeping earlier values of the same header.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.append_raw(name, value);
        self
    }

    pub fn with_header_values<I, S>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for value in values {
            self.headers.append_raw(name, value.as_ref());
        }
        self
    }

    /// Sets `Last-Modified`. A timestamp that cannot be written as an
    /// HTTP-date leaves the header unset.
    pub fn with_last_modified(mut self, epoch_millis: u64) -> Self {
        if let Err(err) = self
            .headers
            .set_date(ResponseHeader::LastModified.as_str(), epoch_millis)
        {
            tracing::warn!("Last-Modified not set: {err}");
        }
        self
    }

    pub fn with_etag(mut self, etag: &str) -> Self {
        self.set_header(ResponseHeader::ETag, etag);
        self
    }

    pub fn with_body(mut self, content_type: &str, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self.set_header(ResponseHeader::ContentType, content_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_collects_headers() {
        let res = HttpResponse::ok()
            .with_last_modified(1_577_836_800_000)
            .with_header("X-Rate-Limiting", "42")
            .with_header_values("Vary", ["foo", "bar"])
            .with_body("text/plain", "Jason");

        assert_eq!(res.status, HttpStatus::Ok);
        assert_eq!(res.headers.get_all("vary"), ["foo", "bar"]);
        assert_eq!(res.body, b"Jason");
        assert_eq!(
            res.headers.stringify(),
            "Last-Modified: Wed, 01 Jan 2020 00:00:00 GMT\r\n\
             X-Rate-Limiting: 42\r\n\
             Vary: foo\r\n\
             Vary: bar\r\n\
             Content-Type: text/plain\r\n"
        );
    }

    #[test]
    fn out_of_range_last_modified_is_skipped() {
        let res = HttpResponse::ok().with_last_modified(u64::MAX);
        assert!(!res.headers.contains("Last-Modified"));
    }
}
