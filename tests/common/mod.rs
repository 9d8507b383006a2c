#![allow(dead_code)]

use std::sync::Once;

use marquee::models::{AppState, Catalog};
use tokio::net::TcpListener;

pub fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("marquee=debug")
            .with_test_writer()
            .init();
    });
}

/// Spawns the application with the built-in catalog and returns its address.
///
/// Returned address format: `http://127.0.0.1:8492`
pub async fn spawn_app() -> String {
    serve(marquee::app()).await
}

/// Spawns the application over a custom catalog and returns its address.
pub async fn spawn_app_with_catalog(catalog: Catalog) -> String {
    let catalog: &'static Catalog = Box::leak(Box::new(catalog));
    serve(marquee::app_with_state(AppState::new(catalog))).await
}

/// Spawns an arbitrary router and returns its address. The router must
/// answer `GET /health` for the readiness check to pass.
pub async fn serve(app: axum::Router) -> String {
    init_tracing_once();

    // Randomly choose an available port
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let address = format!("http://127.0.0.1:{port}");

    // Wait for server to be ready
    let client = reqwest::Client::new();
    for _ in 0..10 {
        if client
            .get(format!("{address}/health"))
            .send()
            .await
            .is_ok()
        {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    }

    address
}
