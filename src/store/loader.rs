// src/store/loader.rs

use crate::domain::Record;
use crate::store::error::DataError;
use crate::store::models::RawRecord;
use reqwest::blocking::Client;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

const USER_AGENT: &str = concat!("lima_housing/", env!("CARGO_PKG_VERSION"));

/// Where the listings document lives.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` values are fetched, anything else is a path.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            DataSource::Url(value.to_string())
        } else {
            DataSource::File(PathBuf::from(value))
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Reads the listings document and returns the displayable records.
pub fn load(source: &DataSource, timeout: Duration) -> Result<Vec<Record>, DataError> {
    let bytes = match source {
        DataSource::File(path) => std::fs::read(path)
            .map_err(|e| DataError::Unavailable(format!("{}: {e}", path.display())))?,
        DataSource::Url(url) => fetch(url, timeout)?,
    };

    let records = parse_records(&bytes)?;
    info!(source = %source, kept = records.len(), "listings loaded");
    Ok(records)
}

fn fetch(url: &str, timeout: Duration) -> Result<Vec<u8>, DataError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;

    let resp = client.get(url).send()?;
    if !resp.status().is_success() {
        return Err(DataError::Unavailable(format!("HTTP {}", resp.status())));
    }

    Ok(resp.bytes()?.to_vec())
}

/// Parses a JSON array of listings and drops the ones that cannot be shown.
/// `null` entries are skipped.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<Record>, DataError> {
    let raw: Vec<Option<RawRecord>> = serde_json::from_slice(bytes)?;
    let read = raw.len();

    let records: Vec<Record> = raw
        .into_iter()
        .flatten()
        .map(Record::from)
        .filter(Record::is_displayable)
        .collect();

    debug!(read, kept = records.len(), "validity filter applied");
    Ok(records)
}
