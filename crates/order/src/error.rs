use thiserror::Error;

pub type OrderResult<T> = Result<T, OrderError>;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Recipe {0} not found")]
    RecipeNotFound(u32),
}
