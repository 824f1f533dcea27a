pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod store;

pub use routes::AppState;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::store::Store;

/// Create the app router over an explicit store instance.
///
/// Tests construct their own isolated `Store` and drive the router without
/// starting the full server.
pub fn create_app(store: Arc<Store>) -> Router {
    use routes::{
        get_order_detail, get_recipe_detail, get_recipe_list, get_waitlist_list, health,
        post_create_order, post_join_waitlist, ready,
    };

    let state = AppState { store };

    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/api/recipes", get(get_recipe_list))
        .route("/api/recipes/{id}", get(get_recipe_detail))
        .route("/api/orders", post(post_create_order))
        .route("/api/orders/{id}", get(get_order_detail))
        .route(
            "/api/waitlist",
            get(get_waitlist_list).post(post_join_waitlist),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
