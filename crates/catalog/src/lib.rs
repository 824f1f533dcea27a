pub mod recipe;
pub mod seed;

pub use recipe::{DEFAULT_CUISINE, Ingredient, Recipe, RecipeDraft};
pub use seed::sample_recipes;
