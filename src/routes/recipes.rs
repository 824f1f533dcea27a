use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{error::AppError, routes::AppState};

/// GET /api/recipes - List the seeded catalog
/// Returns every recipe in seed order. Never fails.
pub async fn get_recipe_list(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_recipes())
}

/// GET /api/recipes/{id} - Fetch one recipe
/// Returns 404 when the id is not in the catalog.
pub async fn get_recipe_detail(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<impl IntoResponse, AppError> {
    let recipe = state.store.recipe(id).ok_or(AppError::RecipeNotFound)?;
    Ok(Json(recipe))
}
