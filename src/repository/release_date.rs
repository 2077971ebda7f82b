//! Publish timestamp of a single version, read from the POM's `Last-Modified` header

use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::StatusCode;
use reqwest::header::LAST_MODIFIED;

use crate::repository::error::RepositoryError;
use crate::repository::transport::HttpTransport;
use crate::types::{Coordinate, ReleaseTimestamp};

/// HEADs the version's POM and parses its `Last-Modified` header.
///
/// A 404 means the version does not exist at this repository and is reported
/// as [`RepositoryError::PomNotFound`] so callers can skip it.
pub async fn resolve_release_date(
    transport: &HttpTransport,
    base_url: &str,
    coordinate: &Coordinate,
    version: &str,
) -> Result<ReleaseTimestamp, RepositoryError> {
    let url = coordinate.pom_url(base_url, version);
    let response = transport.head(&url).await?;

    if response.status() == StatusCode::NOT_FOUND {
        return Err(RepositoryError::PomNotFound { url });
    }

    let Some(header) = response.headers().get(LAST_MODIFIED) else {
        return Err(RepositoryError::MissingTimestamp { url });
    };

    let value = String::from_utf8_lossy(header.as_bytes()).into_owned();
    match parse_http_date(&value) {
        Some(timestamp) => Ok(timestamp),
        None => Err(RepositoryError::InvalidTimestamp { url, value }),
    }
}

const RFC1123_GMT: &str = "%a, %d %b %Y %H:%M:%S";
const RFC1123_OFFSET: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Parses an RFC 1123 HTTP-date such as `Tue, 10 Feb 2009 02:57:59 GMT`.
///
/// The zone is either `GMT` or a numeric offset. Two-digit years, a missing
/// weekday and named zones other than `GMT` are rejected.
pub fn parse_http_date(value: &str) -> Option<ReleaseTimestamp> {
    let value = value.trim();

    // chrono reads `%Y` from as few as one digit
    let year = value.split_whitespace().nth(3)?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match value.strip_suffix(" GMT") {
        Some(local) => NaiveDateTime::parse_from_str(local, RFC1123_GMT)
            .ok()
            .map(|dt| dt.and_utc()),
        None => DateTime::parse_from_str(value, RFC1123_OFFSET)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
    }
}
