//! HTTP fetcher for the status endpoints.

use std::sync::Arc;

use log::debug;
use url::Url;

use super::endpoint::Endpoint;
use super::request::RequestHeaders;
use crate::config::Config;
use crate::error_handling::{
    categorize_reqwest_error, categorize_status, FetchError, InitializationError,
};
use crate::initialization::init_client;

/// Raw response body of a status endpoint.
pub type RawBytes = Vec<u8>;

/// Issues GET requests against the status API.
///
/// Holds no mutable state: the client is shared and the endpoint URLs are
/// resolved once at construction. A fetch never retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
    invasions_url: Url,
    field_offices_url: Url,
    bypass_cache: bool,
}

impl HttpFetcher {
    /// Creates a fetcher sharing an existing client.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::BaseUrlError` if `config.base_url` is not
    /// an absolute http(s) URL.
    pub fn new(client: Arc<reqwest::Client>, config: &Config) -> Result<Self, InitializationError> {
        let base_url = parse_base_url(&config.base_url)?;
        // Relative join so a path prefix on the base URL is kept
        let join = |endpoint: Endpoint| {
            base_url
                .join(endpoint.path().trim_start_matches('/'))
                .map_err(|e| InitializationError::BaseUrlError {
                    url: config.base_url.clone(),
                    reason: e.to_string(),
                })
        };
        Ok(HttpFetcher {
            invasions_url: join(Endpoint::Invasions)?,
            field_offices_url: join(Endpoint::FieldOffices)?,
            client,
            bypass_cache: config.bypass_cache,
        })
    }

    /// Builds its own client from `config` and wraps it.
    pub fn from_config(config: &Config) -> Result<Self, InitializationError> {
        let client = init_client(config)?;
        Self::new(client, config)
    }

    /// Full URL requested for `endpoint`.
    pub fn url(&self, endpoint: Endpoint) -> &Url {
        match endpoint {
            Endpoint::Invasions => &self.invasions_url,
            Endpoint::FieldOffices => &self.field_offices_url,
        }
    }

    /// Fetches the raw body of `endpoint`.
    ///
    /// # Errors
    ///
    /// - `FetchError::HttpStatus` for any non-2xx answer
    /// - `FetchError::Timeout` if the client timeout elapsed
    /// - `FetchError::NetworkUnreachable` for every other transport failure
    pub async fn fetch(&self, endpoint: Endpoint) -> Result<RawBytes, FetchError> {
        let url = self.url(endpoint);
        debug!(
            "GET {} headers={:?}",
            url,
            RequestHeaders::as_vec(self.bypass_cache)
        );

        let request = RequestHeaders::apply_to_request_builder(
            self.client.get(url.clone()),
            self.bypass_cache,
        );
        let response = request
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            debug!("{} answered {}", url, status);
            return Err(categorize_status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;
        debug!("Fetched {} bytes of {}", body.len(), endpoint);
        Ok(body.to_vec())
    }
}

fn parse_base_url(raw: &str) -> Result<Url, InitializationError> {
    let reject = |reason: String| InitializationError::BaseUrlError {
        url: raw.to_string(),
        reason,
    };
    let mut url = Url::parse(raw).map_err(|e| reject(e.to_string()))?;
    match url.scheme() {
        "http" | "https" if url.has_host() => {}
        "http" | "https" => return Err(reject("missing host".to_string())),
        other => return Err(reject(format!("unsupported scheme '{}'", other))),
    }
    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
