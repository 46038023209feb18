use crate::config::MockConfig;
use crate::http::HttpMethod;
use crate::http::request::{HttpRequest, RequestHeader};
use crate::http::response::{HttpResponse, ResponseHeader};
use crate::http::status::HttpStatus;

pub fn apply(req: &HttpRequest, res: &mut HttpResponse, config: &MockConfig) {
    if config.conditional_requests && is_not_modified(req, res) {
        tracing::debug!("{} {} not modified", req.method, req.uri);
        res.status = HttpStatus::NotModified;
    }

    if !res.status.allows_body() {
        strip_body(res);
    } else if !res.headers.contains(ResponseHeader::ContentLength.as_str()) {
        res.set_header(ResponseHeader::ContentLength, &res.body.len().to_string());
    }

    // HEAD keeps the headers a GET would have produced
    if req.method == HttpMethod::Head {
        res.body.clear();
    }

    if let Some(server_name) = &config.server_name {
        res.set_header(ResponseHeader::Server, server_name);
    }
}

/// `If-None-Match` takes precedence over `If-Modified-Since`.
fn is_not_modified(req: &HttpRequest, res: &HttpResponse) -> bool {
    if !req.method.is_safe_read() || res.status != HttpStatus::Ok {
        return false;
    }

    if let Some(if_none_match) = req.headers.get(RequestHeader::IfNoneMatch.as_str()) {
        return res
            .headers
            .get(ResponseHeader::ETag.as_str())
            .is_some_and(|etag| etag_matches(if_none_match, etag));
    }

    let since = req
        .headers
        .get_date(RequestHeader::IfModifiedSince.as_str())
        .and_then(Result::ok);
    let last_modified = res
        .headers
        .get_date(ResponseHeader::LastModified.as_str())
        .and_then(Result::ok);

    match (since, last_modified) {
        (Some(since), Some(last_modified)) => last_modified <= since,
        _ => false,
    }
}

fn etag_matches(if_none_match: &str, etag: &str) -> bool {
    let etag = strip_weak(etag.trim());
    if_none_match
        .split(',')
        .map(str::trim)
        .any(|candidate| candidate == "*" || strip_weak(candidate) == etag)
}

fn strip_weak(tag: &str) -> &str {
    tag.strip_prefix("W/").unwrap_or(tag)
}

/// 204 and 304 carry neither a body nor the headers describing one.
fn strip_body(res: &mut HttpResponse) {
    res.body.clear();
    res.headers.remove(ResponseHeader::ContentLength.as_str());
    res.headers.remove(ResponseHeader::ContentType.as_str());
}
