// Shared helpers for client integration tests

use dataagent_client::HttpClient;
use wiremock::MockServer;

/// Start a mock backend and a client pointed at it
pub async fn setup() -> (MockServer, HttpClient) {
    let server = MockServer::start().await;
    let client = HttpClient::with_base_url(&server.uri()).expect("client should build");
    (server, client)
}
