//! Shared helper for client tests: serve an in-process mock API.

use axum::Router;

/// Bind the given router on an ephemeral local port and return its base
/// URL. The server task runs until the test process exits.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}
