//! Endpoint URLs of the readings service.

use chrono::NaiveDate;
use reqwest::Url;

use roomwatch_domain::room::RoomId;
use roomwatch_domain::time::format_day;

use crate::error::HttpError;

/// Parse and check a base URL. Only `http` and `https` are accepted.
pub(crate) fn parse_base(base_url: &str) -> Result<Url, HttpError> {
    let url = Url::parse(base_url.trim())
        .map_err(|_| HttpError::InvalidBaseUrl(base_url.to_owned()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(HttpError::InvalidBaseUrl(base_url.to_owned()));
    }
    Ok(url)
}

/// `{base}/api/readings/{room}/{yyyy-MM-dd}`
pub(crate) fn readings(base: &Url, room: &RoomId, date: NaiveDate) -> Url {
    with_segments(base, &["api", "readings", room.as_str(), &format_day(date)])
}

/// `{base}/api/current-status`
pub(crate) fn current_status(base: &Url) -> Url {
    with_segments(base, &["api", "current-status"])
}

fn with_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
