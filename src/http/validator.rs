use crate::config::MockConfig;
use crate::http::request::{HttpRequest, RequestHeader};
use crate::http::status::HttpStatus;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    #[error("request has no Host header")]
    MissingHost,
    #[error("HTTP/{0}.{1} is not supported")]
    HttpVersionNotSupported(u8, u8),
    #[error("body of {0} bytes exceeds the configured limit")]
    PayloadTooLarge(usize),
    #[error("malformed header field {0}")]
    MalformedHeaderField(&'static str),
    #[error("Content-Length does not match the body")]
    ContentLengthMismatch,
    #[error("{0} requests cannot carry a body")]
    BodyNotAllowed(&'static str),
}

impl ValidatorError {
    pub fn into_http_status(self) -> HttpStatus {
        match self {
            ValidatorError::MissingHost => HttpStatus::BadRequest,
            ValidatorError::HttpVersionNotSupported(..) => HttpStatus::HttpVersionNotSupported,
            ValidatorError::PayloadTooLarge(_) => HttpStatus::PayloadTooLarge,
            ValidatorError::MalformedHeaderField(_) => HttpStatus::BadRequest,
            ValidatorError::ContentLengthMismatch => HttpStatus::BadRequest,
            ValidatorError::BodyNotAllowed(_) => HttpStatus::BadRequest,
        }
    }
}

pub struct Validator;

impl Validator {
    fn validate_http_version(v: (u8, u8)) -> Result<(), ValidatorError> {
        match v {
            (1, 0) | (1, 1) => Ok(()),
            (major, minor) => Err(ValidatorError::HttpVersionNotSupported(major, minor)),
        }
    }

    fn validate_content_length(req: &HttpRequest) -> Result<(), ValidatorError> {
        let content_length = req
            .headers
            .get(RequestHeader::ContentLength.as_str())
            .map(|v| v.trim().parse::<usize>())
            .transpose()
            .map_err(|_| ValidatorError::MalformedHeaderField("Content-Length"))?;

        match content_length {
            Some(n) if n != req.body.len() => Err(ValidatorError::ContentLengthMismatch),
            _ => Ok(()),
        }
    }

    pub fn validate_request(req: &HttpRequest, config: &MockConfig) -> Result<(), ValidatorError> {
        Self::validate_http_version(req.http_version)?;

        if !req.headers.contains(RequestHeader::Host.as_str()) {
            return Err(ValidatorError::MissingHost);
        }

        Self::validate_content_length(req)?;

        if req.method.is_safe_read() && !req.body.is_empty() {
            return Err(ValidatorError::BodyNotAllowed(req.method.as_str()));
        }

        if req.body.len() > config.max_body_size {
            return Err(ValidatorError::PayloadTooLarge(req.body.len()));
        }

        Ok(())
    }
}
