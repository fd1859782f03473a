//! HTTP handlers
//!
//! Three storefront endpoints plus a health probe. Handlers are pure
//! functions of the request and the injected catalog; no mutable state
//! crosses request boundaries.

use std::path::Path as FsPath;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::catalog::Catalog;
use crate::domain::Product;
use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

/// Builds the application router. `static_dir`, when present, mounts a
/// file-serving variant under `/static`.
pub fn router(state: AppState, static_dir: Option<&FsPath>) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/api/products", get(list_products))
        .route("/api/products/:id", get(get_product))
        .route("/api/checkout", post(checkout));

    if let Some(dir) = static_dir {
        router = router.nest_service("/static", ServeDir::new(dir));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "pooja-store"}))
}

/// `GET /api/products` - the full catalog, unfiltered and unpaginated.
async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.products().to_vec())
}

/// `GET /api/products/:id`
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::ProductNotFound)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub message: String,
    pub order_id: String,
}

/// `POST /api/checkout` - accepts any JSON payload, validates nothing, and
/// always confirms with a synthetic order id. Orders are not stored.
async fn checkout(Json(payload): Json<Value>) -> Json<CheckoutResponse> {
    let line_count = payload
        .get("items")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    let order_id = format!("ORD-{:08}", rand::random::<u32>());
    tracing::info!(%order_id, line_count, "checkout received");
    Json(CheckoutResponse {
        message: "Order placed successfully!".to_string(),
        order_id,
    })
}
