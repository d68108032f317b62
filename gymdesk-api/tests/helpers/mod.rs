//! Shared test helpers: in-process mock backend

use std::sync::Arc;

use axum::Router;
use gymdesk_api::{ApiClient, TokenProvider};

/// Fixed-token provider for tests
pub struct TestToken(pub Option<&'static str>);

impl TokenProvider for TestToken {
    fn token(&self) -> Option<String> {
        self.0.map(str::to_string)
    }
}

/// Bind the router on an ephemeral port and return its base URL.
pub async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock backend");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock backend");
    });

    format!("http://{addr}")
}

/// Client pointed at a freshly spawned mock backend.
pub async fn client_for(app: Router) -> Arc<ApiClient> {
    let base_url = spawn_backend(app).await;
    Arc::new(
        ApiClient::with_base_url(&base_url, Arc::new(TestToken(Some("test-token"))))
            .expect("client creation"),
    )
}
