use serde::{Deserialize, Serialize};

/// Cuisine label applied when a recipe definition leaves it unset.
pub const DEFAULT_CUISINE: &str = "Indian";

/// One ingredient line of a recipe kit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    /// Whether the buyer may drop this ingredient at checkout.
    pub is_customizable: bool,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: f64,
        unit: impl Into<String>,
        is_customizable: bool,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            is_customizable,
        }
    }
}

/// A catalog recipe. Seeded at store construction and immutable afterward.
///
/// `price` is the full price for `servings` servings, in paisa.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// Preparation time in minutes.
    pub prep_time: u32,
    /// Cooking time in minutes.
    pub cook_time: u32,
    /// Base serving count the price refers to.
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    /// Full base-serving price in paisa.
    pub price: i64,
    pub cuisine: String,
}

/// A recipe definition before the store assigns an id.
#[derive(Debug, Clone)]
pub struct RecipeDraft {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub price: i64,
    pub cuisine: Option<String>,
}

impl RecipeDraft {
    /// Finalize the draft under a store-assigned id.
    pub fn into_recipe(self, id: u32) -> Recipe {
        Recipe {
            id,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            ingredients: self.ingredients,
            instructions: self.instructions,
            price: self.price,
            cuisine: self.cuisine.unwrap_or_else(|| DEFAULT_CUISINE.to_owned()),
        }
    }
}
