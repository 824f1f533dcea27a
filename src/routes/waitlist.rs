use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use recipekit_waitlist::JoinWaitlist;
use serde_json::json;
use validator::Validate;

use crate::routes::AppState;

/// POST /api/waitlist - Early-access signup
///
/// Responds with the `{success, message, data}` envelope the landing page
/// consumes: 201 on success, 400 with `success: false` on bad input.
pub async fn post_join_waitlist(
    State(state): State<AppState>,
    payload: Result<Json<JoinWaitlist>, JsonRejection>,
) -> impl IntoResponse {
    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "message": rejection.body_text() })),
            );
        }
    };

    if let Err(errors) = input.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "message": errors.to_string() })),
        );
    }

    let entry = state.store.join_waitlist(input);
    tracing::info!(entry.id = entry.id, "Waitlist signup");

    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Successfully added to waitlist",
            "data": entry,
        })),
    )
}

/// GET /api/waitlist - List signups in insertion order
pub async fn get_waitlist_list(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_waitlist())
}
