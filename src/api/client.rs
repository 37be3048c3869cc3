use std::time::Duration;

use ureq::Agent;

use super::types::{Photo, PhotosPayload};
use crate::error::FetchError;

#[derive(Debug)]
pub(crate) struct FetchResult {
    pub(crate) photos: Vec<Photo>,
    /// Malformed records dropped during decoding
    pub(crate) skipped: usize,
}

/// One agent per process, with an explicit global timeout so a stalled
/// connection cannot hang the invocation indefinitely.
pub(crate) fn build_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .into()
}

pub(crate) fn fetch_photos(agent: &Agent, url: &str) -> Result<FetchResult, FetchError> {
    let response = agent.get(url).call().map_err(|e| match e {
        ureq::Error::StatusCode(code) => FetchError::Status(code),
        other => FetchError::Network(other),
    })?;
    let mut body = response.into_body();
    let payload: PhotosPayload = serde_json::from_reader(body.as_reader())?;
    decode_photos(payload.photos)
}

/// Decode each element independently, dropping the ones that do not
/// match the photo shape. A batch with nothing decodable is `Empty`.
fn decode_photos(raw: Vec<serde_json::Value>) -> Result<FetchResult, FetchError> {
    let mut photos = Vec::with_capacity(raw.len());
    let mut skipped = 0;
    for value in raw {
        match serde_json::from_value::<Photo>(value) {
            Ok(photo) => photos.push(photo),
            Err(_) => skipped += 1,
        }
    }
    if photos.is_empty() {
        return Err(FetchError::Empty);
    }
    Ok(FetchResult { photos, skipped })
}

/// Strip the credential value before a URL reaches any log line.
pub(crate) fn redact_key(url: &str) -> String {
    let Some(start) = url.find("api_key=") else {
        return url.to_string();
    };
    let value_start = start + "api_key=".len();
    let value_end = url[value_start..]
        .find('&')
        .map(|i| value_start + i)
        .unwrap_or(url.len());
    format!("{}REDACTED{}", &url[..value_start], &url[value_end..])
}
