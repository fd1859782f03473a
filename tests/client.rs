//! End-to-end tests: client and session against a live in-process server.

use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::task::JoinHandle;

use pooja_store::catalog::Catalog;
use pooja_store::client::{ApiClient, ClientError};
use pooja_store::routes::{self, AppState};
use pooja_store::session::StoreSession;

async fn spawn_server() -> (String, JoinHandle<()>) {
    let state = AppState {
        catalog: Arc::new(Catalog::builtin()),
    };
    let app = routes::router(state, None);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), handle)
}

#[tokio::test]
async fn test_fetch_product() {
    let (base_url, server) = spawn_server().await;
    let client = ApiClient::new(base_url);

    let product = client.fetch_product("1").await.unwrap();
    assert_eq!(product.name, "Brass Diya");
    assert_eq!(product.price, Decimal::new(1599, 2));

    let err = client.fetch_product("99").await.unwrap_err();
    assert!(matches!(err, ClientError::ProductNotFound));

    server.abort();
}

#[tokio::test]
async fn test_session_shopping_flow() {
    let (base_url, server) = spawn_server().await;
    let mut session = StoreSession::new(ApiClient::new(base_url));

    assert!(session.is_loading());
    session.load_catalog().await;
    assert!(!session.is_loading());
    assert_eq!(session.catalog().len(), 4);

    assert!(session.add_to_cart("1"));
    assert!(session.add_to_cart("1"));
    assert!(session.add_to_cart("2"));
    assert!(!session.add_to_cart("99"));

    assert_eq!(session.cart().len(), 2);
    assert_eq!(session.cart().get("1").unwrap().quantity, 2);
    // 2 * 15.99 + 5.49
    assert_eq!(session.total(), Decimal::new(3747, 2));

    let confirmation = session.checkout().await.unwrap();
    assert!(confirmation.order_id.starts_with("ORD-"));
    assert!(session.cart().is_empty());

    server.abort();
}

#[tokio::test]
async fn test_catalog_fetch_failure_leaves_empty_catalog() {
    // Nothing listens here; the fetch fails at the transport level.
    let mut session = StoreSession::new(ApiClient::new("http://127.0.0.1:1"));
    session.load_catalog().await;
    assert!(!session.is_loading());
    assert!(session.catalog().is_empty());
}

#[tokio::test]
async fn test_checkout_failure_preserves_cart() {
    let (base_url, server) = spawn_server().await;
    let mut session = StoreSession::new(ApiClient::new(base_url));
    session.load_catalog().await;
    assert!(session.add_to_cart("3"));
    session.update_quantity("3", 1);

    // Take the server down before submitting.
    server.abort();
    let _ = server.await;

    let result = session.checkout().await;
    assert!(result.is_err());
    assert_eq!(session.cart().len(), 1);
    assert_eq!(session.cart().get("3").unwrap().quantity, 2);
}
