//! HTTP-date codec.
//!
//! Dates are written in the RFC 1123 form (`Wed, 01 Jan 2020 00:00:00 GMT`),
//! always in GMT and with second precision. Parsing also accepts the obsolete
//! RFC 850 and asctime forms. Values are exchanged as milliseconds since the
//! Unix epoch; sub-second precision is dropped when formatting.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// First instant that no longer fits in a four-digit year.
const MAX_HTTP_DATE_MILLIS: u64 = 253_402_300_800_000;

#[derive(Debug, thiserror::Error)]
pub enum HttpDateError {
    #[error("invalid HTTP-date: {0}")]
    Invalid(#[from] httpdate::Error),

    #[error("{0} ms since epoch cannot be written as an HTTP-date")]
    OutOfRange(u64),
}

pub fn format_http_date(epoch_millis: u64) -> Result<String, HttpDateError> {
    if epoch_millis >= MAX_HTTP_DATE_MILLIS {
        return Err(HttpDateError::OutOfRange(epoch_millis));
    }
    Ok(httpdate::fmt_http_date(
        UNIX_EPOCH + Duration::from_millis(epoch_millis),
    ))
}

pub fn parse_http_date(value: &str) -> Result<u64, HttpDateError> {
    let time = httpdate::parse_http_date(value.trim())?;
    Ok(millis_since_epoch(time))
}

/// Drops the sub-second part, matching what an HTTP-date can carry.
pub fn truncate_to_seconds(epoch_millis: u64) -> u64 {
    epoch_millis - epoch_millis % 1000
}

fn millis_since_epoch(time: SystemTime) -> u64 {
    // httpdate never yields dates before 1970
    time.duration_since(UNIX_EPOCH)
        .map(|dur| dur.as_secs() * 1000)
        .unwrap_or(0)
}
