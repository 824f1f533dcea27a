//! The fixed catalog the store is seeded with.

use crate::recipe::{Ingredient, RecipeDraft};

/// The sample recipe kits, in seed order. Ids are assigned by the store.
pub fn sample_recipes() -> Vec<RecipeDraft> {
    vec![
        RecipeDraft {
            name: "Butter Chicken".to_owned(),
            description:
                "Rich and creamy curry made with tender chicken in a mildly spiced tomato sauce"
                    .to_owned(),
            image_url: "https://images.unsplash.com/photo-1603894584373-5ac82b2ae398".to_owned(),
            prep_time: 25,
            cook_time: 30,
            servings: 2,
            ingredients: vec![
                Ingredient::new("Chicken breast", 500.0, "g", true),
                Ingredient::new("Tomato puree", 200.0, "ml", false),
                Ingredient::new("Heavy cream", 100.0, "ml", true),
                Ingredient::new("Butter", 50.0, "g", false),
                Ingredient::new("Garam masala", 2.0, "tsp", false),
                Ingredient::new("Kasuri methi", 1.0, "tsp", true),
                Ingredient::new("Garlic paste", 1.0, "tbsp", false),
                Ingredient::new("Ginger paste", 1.0, "tbsp", false),
            ],
            instructions: vec![
                "Marinate chicken with yogurt, ginger-garlic paste, and spices for 2 hours"
                    .to_owned(),
                "Cook marinated chicken in tandoor or oven until 80% done".to_owned(),
                "Prepare sauce by sautéing onions, adding tomato puree and spices".to_owned(),
                "Add cream and butter to the sauce".to_owned(),
                "Add chicken pieces to the sauce and simmer for 10 minutes".to_owned(),
                "Garnish with kasuri methi and serve hot with naan".to_owned(),
            ],
            price: 39900,
            cuisine: Some("North Indian".to_owned()),
        },
        RecipeDraft {
            name: "Masala Dosa".to_owned(),
            description: "Crisp fermented rice pancake stuffed with spiced potato filling"
                .to_owned(),
            image_url: "https://images.unsplash.com/photo-1589301760014-d929f3979dbc".to_owned(),
            prep_time: 30,
            cook_time: 15,
            servings: 2,
            ingredients: vec![
                Ingredient::new("Rice batter", 300.0, "ml", false),
                Ingredient::new("Potatoes", 200.0, "g", true),
                Ingredient::new("Onions", 100.0, "g", true),
                Ingredient::new("Mustard seeds", 1.0, "tsp", false),
                Ingredient::new("Curry leaves", 5.0, "pcs", false),
                Ingredient::new("Green chilies", 2.0, "pcs", true),
                Ingredient::new("Turmeric powder", 0.5, "tsp", false),
                Ingredient::new("Coconut chutney", 50.0, "g", true),
                Ingredient::new("Sambar", 100.0, "ml", true),
            ],
            instructions: vec![
                "Boil potatoes until soft, then peel and mash them".to_owned(),
                "In a pan, add oil, mustard seeds, curry leaves, and let them splutter".to_owned(),
                "Add chopped onions, green chilies and sauté until translucent".to_owned(),
                "Add turmeric powder and mashed potatoes, mix well".to_owned(),
                "Heat dosa tawa, pour a ladle of batter and spread in circular motion".to_owned(),
                "Add oil around the edges and cook until crisp".to_owned(),
                "Place potato filling in the center and fold the dosa".to_owned(),
                "Serve hot with coconut chutney and sambar".to_owned(),
            ],
            price: 14900,
            cuisine: Some("South Indian".to_owned()),
        },
        RecipeDraft {
            name: "Paneer Tikka".to_owned(),
            description: "Chunks of cottage cheese marinated with spices and grilled to perfection"
                .to_owned(),
            image_url: "https://images.unsplash.com/photo-1567188040759-fb8a883dc6d6".to_owned(),
            prep_time: 30,
            cook_time: 15,
            servings: 2,
            ingredients: vec![
                Ingredient::new("Paneer", 250.0, "g", true),
                Ingredient::new("Bell peppers", 100.0, "g", true),
                Ingredient::new("Onions", 100.0, "g", true),
                Ingredient::new("Yogurt", 100.0, "ml", false),
                Ingredient::new("Ginger paste", 1.0, "tsp", false),
                Ingredient::new("Garlic paste", 1.0, "tsp", false),
                Ingredient::new("Tikka masala", 2.0, "tbsp", false),
                Ingredient::new("Chaat masala", 1.0, "tsp", false),
                Ingredient::new("Lemon juice", 2.0, "tsp", false),
            ],
            instructions: vec![
                "Cut paneer, bell peppers, and onions into 1-inch cubes".to_owned(),
                "Mix yogurt with all the spices, ginger-garlic paste, and lemon juice".to_owned(),
                "Add the cubed paneer and vegetables to the marinade and mix well".to_owned(),
                "Let it marinate for at least 30 minutes".to_owned(),
                "Thread the marinated paneer and vegetables onto skewers".to_owned(),
                "Grill in a preheated oven at 200°C for 10-15 minutes".to_owned(),
                "Brush with butter and grill for another 5 minutes".to_owned(),
                "Sprinkle chaat masala and serve hot with mint chutney".to_owned(),
            ],
            price: 24900,
            cuisine: Some("North Indian".to_owned()),
        },
    ]
}
