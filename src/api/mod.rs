//! NASA Mars Photos API client
//!
//! Blocking HTTP fetch of the `photos` listing plus decoding into typed
//! photo records. Malformed elements are skipped, not fatal.

mod client;
mod types;

pub(crate) use client::{FetchResult, build_agent, fetch_photos, redact_key};
pub(crate) use types::{Camera, Photo};
