use recipekit_catalog::Ingredient;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::status::OrderStatus;

/// A customer's purchase of one recipe kit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u32,
    pub recipe_id: u32,
    pub customer_name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub status: OrderStatus,
    /// Computed from the recipe's price, in paisa. Never client-supplied.
    pub total: i64,
    pub serving_count: u32,
    /// Ingredients the buyer kept. Empty when the kit was not customized.
    pub customized_ingredients: Vec<Ingredient>,
}

/// Client-supplied fields for order creation.
///
/// The id, status, and total are assigned server-side. Recipe existence is
/// checked by the store, not here.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    #[validate(range(min = 1, message = "recipeId must be a positive integer"))]
    pub recipe_id: u32,

    #[validate(length(min = 1, message = "customerName is required"))]
    pub customer_name: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(length(min = 1, message = "address is required"))]
    pub address: String,

    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,

    /// Defaults to the recipe's base serving count when omitted.
    #[validate(range(min = 1, message = "servingCount must be at least 1"))]
    pub serving_count: Option<u32>,

    /// The kept-ingredient subset. Omitting it means no customization.
    pub customized_ingredients: Option<Vec<Ingredient>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> CreateOrder {
        CreateOrder {
            recipe_id: 1,
            customer_name: "Asha Rao".to_owned(),
            email: "asha@example.com".to_owned(),
            address: "12 MG Road, Bengaluru".to_owned(),
            phone: "+91 98765 43210".to_owned(),
            serving_count: Some(2),
            customized_ingredients: None,
        }
    }

    #[test]
    fn valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn empty_customer_name_fails() {
        let mut input = valid_input();
        input.customer_name = String::new();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("customer_name"));
    }

    #[test]
    fn malformed_email_fails() {
        let mut input = valid_input();
        input.email = "not-an-email".to_owned();
        assert!(input.validate().is_err());
    }

    #[test]
    fn zero_recipe_id_fails() {
        let mut input = valid_input();
        input.recipe_id = 0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn zero_serving_count_fails() {
        let mut input = valid_input();
        input.serving_count = Some(0);
        assert!(input.validate().is_err());
    }

    #[test]
    fn omitted_serving_count_passes() {
        let mut input = valid_input();
        input.serving_count = None;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn input_deserializes_camel_case_body() {
        let input: CreateOrder = serde_json::from_value(serde_json::json!({
            "recipeId": 1,
            "customerName": "Asha Rao",
            "email": "asha@example.com",
            "address": "12 MG Road, Bengaluru",
            "phone": "+91 98765 43210"
        }))
        .unwrap();
        assert_eq!(input.recipe_id, 1);
        assert!(input.serving_count.is_none());
        assert!(input.customized_ingredients.is_none());
    }
}
