//! Shared helpers for integration tests

use serde_json::json;
use taskdeck::api::HttpTaskApi;
use taskdeck::config::ApiConfig;
use taskdeck::session::Session;
use wiremock::MockServer;

/// Build an API client pointed at the mock server
pub fn api_for(server: &MockServer) -> HttpTaskApi {
    let config = ApiConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
    };
    HttpTaskApi::new(&config).expect("failed to build client")
}

/// A session carrying the given bearer token
pub fn session_with_token(token: &str) -> Session {
    Session {
        user_id: 42,
        user_name: "frida".to_string(),
        email: "frida@example.com".to_string(),
        token: token.to_string(),
    }
}

/// Task JSON as the backend returns it
pub fn task_json(id: i64, name: &str, completed: bool) -> serde_json::Value {
    json!({
        "task_id": id,
        "task_name": name,
        "location_name": null,
        "task_date": null,
        "task_time": null,
        "completed": completed
    })
}
