use axum::Router;
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_stub_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Failed to read stub address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    format!("http://{}", addr)
}
