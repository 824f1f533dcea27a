use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use recipekit_order::OrderError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Order not found")]
    OrderNotFound,

    #[error("Order references unknown recipe {0}")]
    UnknownOrderRecipe(u32),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Validation(msg) => AppError::Validation(msg),
            // A missing recipe during order creation is a client input
            // error, not a lookup miss.
            OrderError::RecipeNotFound(id) => AppError::UnknownOrderRecipe(id),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::RecipeNotFound => (StatusCode::NOT_FOUND, "Recipe not found".to_owned()),
            AppError::OrderNotFound => (StatusCode::NOT_FOUND, "Order not found".to_owned()),
            AppError::UnknownOrderRecipe(_) => {
                (StatusCode::BAD_REQUEST, "Recipe not found".to_owned())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred. Please try again later.".to_owned(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_misses_map_to_404() {
        assert_eq!(
            AppError::RecipeNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::OrderNotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn client_input_errors_map_to_400() {
        assert_eq!(
            AppError::Validation("bad".to_owned()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UnknownOrderRecipe(999).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn unexpected_failures_map_to_500_with_generic_message() {
        let response = AppError::Internal("boom".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn order_errors_convert_per_variant() {
        assert!(matches!(
            AppError::from(OrderError::RecipeNotFound(4)),
            AppError::UnknownOrderRecipe(4)
        ));
        assert!(matches!(
            AppError::from(OrderError::Validation("x".to_owned())),
            AppError::Validation(_)
        ));
    }
}
