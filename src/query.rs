//! Query selectors and request building
//!
//! A query carries at most one active time selector. When both an Earth
//! date and a sol are supplied, the Earth date wins; when neither is
//! supplied, building the request fails before any network activity.

use chrono::NaiveDate;

use crate::consts::{BASE_URL, DATE_FORMAT};
use crate::error::QueryError;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Query {
    pub(crate) earth_date: Option<NaiveDate>,
    pub(crate) sol: Option<u32>,
}

impl Query {
    pub(crate) fn from_date(date: NaiveDate) -> Self {
        Query {
            earth_date: Some(date),
            sol: None,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.earth_date.is_none() && self.sol.is_none()
    }

    /// Human-readable selector, used in headings and empty-result messages
    pub(crate) fn describe(&self) -> String {
        match (self.earth_date, self.sol) {
            (Some(date), _) => format!("Earth date {}", date.format(DATE_FORMAT)),
            (None, Some(sol)) => format!("sol {sol}"),
            (None, None) => "no selector".to_string(),
        }
    }
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, QueryError> {
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(d);
    }
    Err(QueryError::InvalidDate {
        input: s.to_string(),
    })
}

/// Compose the listing URL for a query. Pure up to the caller-supplied key.
pub(crate) fn build_request(query: &Query, api_key: &str) -> Result<String, QueryError> {
    let mut url = format!("{BASE_URL}?api_key={api_key}");
    if let Some(date) = query.earth_date {
        url.push_str(&format!("&earth_date={}", date.format(DATE_FORMAT)));
    } else if let Some(sol) = query.sol {
        url.push_str(&format!("&sol={sol}"));
    } else {
        return Err(QueryError::MissingSelector);
    }
    Ok(url)
}
