//! HTTP request headers.

use reqwest::header::{ACCEPT, CACHE_CONTROL, PRAGMA};

use crate::config::{ACCEPT_JSON, NO_CACHE};

/// Headers applied to every status request.
///
/// The User-Agent is set once on the client (see `init_client`); this only
/// adds the per-request content negotiation and cache directives.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Returns headers as a vector of (name, value) tuples for logging.
    pub(crate) fn as_vec(bypass_cache: bool) -> Vec<(String, String)> {
        let mut headers = vec![("accept".to_string(), ACCEPT_JSON.to_string())];
        if bypass_cache {
            headers.push(("cache-control".to_string(), NO_CACHE.to_string()));
            headers.push(("pragma".to_string(), NO_CACHE.to_string()));
        }
        headers
    }

    /// Applies the request headers to a `reqwest::RequestBuilder`.
    ///
    /// With `bypass_cache`, `Cache-Control: no-cache` (and the HTTP/1.0
    /// `Pragma` equivalent) force every intermediary to revalidate.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
        bypass_cache: bool,
    ) -> reqwest::RequestBuilder {
        let builder = builder.header(ACCEPT, ACCEPT_JSON);
        if bypass_cache {
            builder
                .header(CACHE_CONTROL, NO_CACHE)
                .header(PRAGMA, NO_CACHE)
        } else {
            builder
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_vec_with_cache_bypass() {
        let headers = RequestHeaders::as_vec(true);
        assert!(headers.contains(&("cache-control".to_string(), "no-cache".to_string())));
        assert!(headers.contains(&("accept".to_string(), "application/json".to_string())));
    }

    #[test]
    fn test_as_vec_without_cache_bypass() {
        let headers = RequestHeaders::as_vec(false);
        assert_eq!(headers.len(), 1);
        assert!(!headers.iter().any(|(name, _)| name == "cache-control"));
    }

    #[test]
    fn test_apply_to_request_builder_sets_no_cache() {
        let client = reqwest::Client::new();
        let request = RequestHeaders::apply_to_request_builder(
            client.get("http://localhost/api/invasions"),
            true,
        )
        .build()
        .expect("request should build");
        assert_eq!(
            request.headers().get(CACHE_CONTROL).map(|v| v.as_bytes()),
            Some(&b"no-cache"[..])
        );
        assert_eq!(
            request.headers().get(ACCEPT).map(|v| v.as_bytes()),
            Some(&b"application/json"[..])
        );
    }

    #[test]
    fn test_apply_to_request_builder_without_bypass() {
        let client = reqwest::Client::new();
        let request = RequestHeaders::apply_to_request_builder(
            client.get("http://localhost/api/fieldoffices"),
            false,
        )
        .build()
        .expect("request should build");
        assert!(request.headers().get(CACHE_CONTROL).is_none());
    }
}
