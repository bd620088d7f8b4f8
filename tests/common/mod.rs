//! Common test utilities

use serde_json::{json, Value};
use userdesk::core::Services;
use userdesk::models::{BackendConfig, User};
use wiremock::MockServer;

/// Start a mock users backend
pub async fn start_backend() -> MockServer {
    MockServer::start().await
}

/// Backend configuration pointing at the mock server
pub fn backend_config(server: &MockServer) -> BackendConfig {
    BackendConfig {
        url: server.uri(),
        timeout_seconds: 5,
        ..Default::default()
    }
}

/// Services connected to the mock server
pub fn services_for(server: &MockServer) -> Services {
    Services::connect(&backend_config(server)).expect("Failed to connect services")
}

/// A user record as the backend would return it
pub fn user_json(id: i64, user_name: &str) -> Value {
    json!({
        "user_id": id,
        "user_name": user_name,
        "first_name": "John",
        "last_name": "Doe",
        "email": format!("{}@example.com", user_name),
        "user_status": "A",
        "department": "Engineering"
    })
}

/// Same record as a typed user
pub fn user(id: i64, user_name: &str) -> User {
    serde_json::from_value(user_json(id, user_name)).expect("Failed to build user")
}
