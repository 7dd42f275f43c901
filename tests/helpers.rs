// Shared test helpers for mock API setup.
//
// This module provides common payloads and a config pointing at a wiremock server.

use ttr_status::Config;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)] // Used by other test files
pub const INVASIONS_BODY: &str = r#"{
    "error": null,
    "invasions": {
        "Silly Street": {"asOf": 1700000000, "type": "Supervisor", "progress": "40/50"},
        "Polar Place": {"asOf": 1700000042, "type": "Bloodsucker", "progress": "2000/3000"}
    },
    "lastUpdated": 1700000060
}"#;

#[allow(dead_code)]
pub const FIELD_OFFICES_BODY: &str = r#"{
    "fieldOffices": {
        "3100": {"department": "s", "difficulty": 0, "annexes": 9, "open": true},
        "5300": {"department": "l", "difficulty": 4, "annexes": 2, "open": false},
        "9999": {"department": "c", "difficulty": 2, "annexes": 5, "open": true}
    },
    "lastUpdated": 1700000120
}"#;

/// Config aimed at `server` with a short timeout and quiet logging.
pub fn config_for(server: &MockServer) -> Config {
    Config {
        base_url: server.uri(),
        user_agent: "ttr_status_test/1.0".to_string(),
        timeout_seconds: Some(5),
        ..Default::default()
    }
}

/// Mounts a plain GET mock answering `route` with `status` and `body`.
#[allow(dead_code)]
pub async fn mount_json(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body.to_string()))
        .mount(server)
        .await;
}
