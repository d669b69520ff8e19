use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::GeocoderConfig;
use crate::error::{GeoError, Result};

const USER_AGENT: &str = concat!("gmaps-lookup/", env!("CARGO_PKG_VERSION"));

/// True exactly when the server answered with 200 OK
pub fn check_status(response: &Response) -> bool {
    response.status() == StatusCode::OK
}

/// Blocking client for the geocoding and place search endpoints.
///
/// Holds an immutable [`GeocoderConfig`]; use [`GeoClient::with_config`] to
/// issue a lookup against a different key or endpoint.
#[derive(Debug, Clone)]
pub struct GeoClient {
    config: GeocoderConfig,
    http: Client,
}

impl GeoClient {
    pub fn new(config: GeocoderConfig) -> Result<Self> {
        config.validate()?;
        let http = build_http_client(config.timeout_secs)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeocoderConfig {
        &self.config
    }

    /// Derive a client with different settings, sharing the connection pool
    /// when the timeout is unchanged
    pub fn with_config(&self, config: GeocoderConfig) -> Result<Self> {
        config.validate()?;
        let http = if config.timeout_secs == self.config.timeout_secs {
            self.http.clone()
        } else {
            build_http_client(config.timeout_secs)?
        };
        Ok(Self { config, http })
    }

    /// GET `url` with `params` plus the API key and decode the JSON body
    pub(crate) fn get<T: DeserializeOwned>(&self, url: &str, params: &[(&str, &str)]) -> Result<T> {
        log::debug!("GET {} {:?}", url, params);

        let response = self
            .http
            .get(url)
            .query(params)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .map_err(|e| GeoError::Transport(format!("request to {} failed: {}", url, e)))?;

        if !check_status(&response) {
            return Err(GeoError::Transport(format!(
                "{} returned error status: {}",
                url,
                response.status()
            )));
        }

        response.json().map_err(|e| {
            if e.is_decode() {
                GeoError::MalformedResponse(format!("failed to parse JSON from {}: {}", url, e))
            } else {
                GeoError::Transport(format!("failed to read response from {}: {}", url, e))
            }
        })
    }
}

fn build_http_client(timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| GeoError::Transport(format!("failed to create HTTP client: {}", e)))
}
