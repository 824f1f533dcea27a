use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use recipekit_order::CreateOrder;
use validator::Validate;

use crate::{error::AppError, routes::AppState};

/// POST /api/orders - Create an order
///
/// The body is validated before the store is touched; the total is computed
/// server-side from the referenced recipe. A missing recipe is a 400, not a
/// 404 - the reference came from the client.
pub async fn post_create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrder>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    input.validate()?;

    let order = state.store.create_order(input)?;
    tracing::info!(order.id = order.id, order.total = order.total, "Order created");

    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /api/orders/{id} - Fetch one order
/// Returns 404 when the id is unknown.
pub async fn get_order_detail(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, AppError> {
    let order = state.store.order(id).ok_or(AppError::OrderNotFound)?;
    Ok(Json(order))
}
