//! Breed list fetching from the public cat API

use crate::config::Config;
use crate::model::Breed;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("could not decode breed list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetch the breed list with a single blocking GET
pub fn fetch_breeds(config: &Config) -> Result<Vec<Breed>, FetchError> {
    let url = config.endpoint.as_str();
    let request_error = |source| FetchError::Request {
        url: url.to_string(),
        source,
    };

    let mut builder = reqwest::blocking::Client::builder();
    // The blocking client defaults to a 30s timeout; no config means no limit
    builder = builder.timeout(config.request_timeout_secs.map(Duration::from_secs));
    let client = builder.build().map_err(request_error)?;

    tracing::info!(url, "fetching breed list");
    let response = client.get(url).send().map_err(request_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().map_err(request_error)?;
    let breeds = decode_breeds(&body)?;
    tracing::info!(count = breeds.len(), "breed list loaded");
    Ok(breeds)
}

/// Parse a response body as a JSON array of breeds
pub fn decode_breeds(body: &str) -> Result<Vec<Breed>, FetchError> {
    Ok(serde_json::from_str(body)?)
}
