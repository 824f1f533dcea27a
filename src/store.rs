//! In-memory data store. Sole owner of the recipe, order, and waitlist
//! collections and their id counters.

use std::collections::BTreeMap;

use chrono::Utc;
use parking_lot::RwLock;
use recipekit_catalog::{Recipe, sample_recipes};
use recipekit_order::{CreateOrder, Order, OrderError, OrderResult, OrderStatus, pricing};
use recipekit_waitlist::{JoinWaitlist, WaitlistEntry};

/// Process-lifetime storage behind a synchronous lock.
///
/// No operation awaits while holding the lock, so every store call is one
/// indivisible unit of work. Constructed explicitly and injected into the
/// handler layer; tests build isolated instances.
pub struct Store {
    inner: RwLock<Inner>,
}

struct Inner {
    recipes: BTreeMap<u32, Recipe>,
    orders: BTreeMap<u32, Order>,
    waitlist: BTreeMap<u32, WaitlistEntry>,
    next_order_id: u32,
    next_waitlist_id: u32,
}

impl Store {
    /// Construct a store seeded with the fixed sample catalog.
    pub fn new() -> Self {
        let mut recipes = BTreeMap::new();
        let mut next_recipe_id = 1;
        for draft in sample_recipes() {
            recipes.insert(next_recipe_id, draft.into_recipe(next_recipe_id));
            next_recipe_id += 1;
        }

        Store {
            inner: RwLock::new(Inner {
                recipes,
                orders: BTreeMap::new(),
                waitlist: BTreeMap::new(),
                next_order_id: 1,
                next_waitlist_id: 1,
            }),
        }
    }

    /// All seeded recipes in insertion order.
    pub fn list_recipes(&self) -> Vec<Recipe> {
        self.inner.read().recipes.values().cloned().collect()
    }

    /// Look up one recipe.
    pub fn recipe(&self, id: u32) -> Option<Recipe> {
        self.inner.read().recipes.get(&id).cloned()
    }

    /// Create an order against an existing recipe.
    ///
    /// Fails without storing anything when the referenced recipe is absent.
    /// The total is always derived from the recipe's price; the order id is
    /// assigned only on successful insertion.
    pub fn create_order(&self, input: CreateOrder) -> OrderResult<Order> {
        let mut inner = self.inner.write();

        let (base_price, base_servings, ingredient_count) = {
            let recipe = inner
                .recipes
                .get(&input.recipe_id)
                .ok_or(OrderError::RecipeNotFound(input.recipe_id))?;
            (recipe.price, recipe.servings, recipe.ingredients.len())
        };

        let serving_count = input.serving_count.unwrap_or(base_servings);
        let deselected = input
            .customized_ingredients
            .as_ref()
            .map(|kept| ingredient_count.saturating_sub(kept.len()))
            .unwrap_or(0);

        let total = pricing::order_total(
            base_price,
            base_servings,
            serving_count,
            ingredient_count,
            deselected,
        );

        let id = inner.next_order_id;
        let order = Order {
            id,
            recipe_id: input.recipe_id,
            customer_name: input.customer_name,
            email: input.email,
            address: input.address,
            phone: input.phone,
            status: OrderStatus::default(),
            total,
            serving_count,
            customized_ingredients: input.customized_ingredients.unwrap_or_default(),
        };

        inner.next_order_id += 1;
        inner.orders.insert(id, order.clone());
        Ok(order)
    }

    /// Look up one order.
    pub fn order(&self, id: u32) -> Option<Order> {
        self.inner.read().orders.get(&id).cloned()
    }

    /// Number of stored orders.
    pub fn order_count(&self) -> usize {
        self.inner.read().orders.len()
    }

    /// Append a waitlist signup, stamping the creation time.
    pub fn join_waitlist(&self, input: JoinWaitlist) -> WaitlistEntry {
        let mut inner = self.inner.write();
        let id = inner.next_waitlist_id;
        let entry = WaitlistEntry {
            id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            created_at: Utc::now(),
        };
        inner.next_waitlist_id += 1;
        inner.waitlist.insert(id, entry.clone());
        entry
    }

    /// All waitlist entries in insertion order.
    pub fn list_waitlist(&self) -> Vec<WaitlistEntry> {
        self.inner.read().waitlist.values().cloned().collect()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_input(recipe_id: u32) -> CreateOrder {
        CreateOrder {
            recipe_id,
            customer_name: "Asha Rao".to_owned(),
            email: "asha@example.com".to_owned(),
            address: "12 MG Road, Bengaluru".to_owned(),
            phone: "+91 98765 43210".to_owned(),
            serving_count: None,
            customized_ingredients: None,
        }
    }

    #[test]
    fn fresh_store_lists_seeded_recipes_in_order() {
        let store = Store::new();
        let recipes = store.list_recipes();
        assert_eq!(recipes.len(), 3);
        let ids: Vec<u32> = recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        for recipe in &recipes {
            assert_eq!(store.recipe(recipe.id).unwrap().name, recipe.name);
        }
    }

    #[test]
    fn recipe_lookup_misses_return_none() {
        let store = Store::new();
        assert!(store.recipe(999).is_none());
        assert!(store.order(999).is_none());
    }

    #[test]
    fn create_order_defaults_serving_count_and_status() {
        let store = Store::new();
        let order = store.create_order(order_input(1)).unwrap();
        assert_eq!(order.id, 1);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.serving_count, 2);
        assert_eq!(order.total, 39900);
        assert!(order.customized_ingredients.is_empty());
    }

    #[test]
    fn create_order_prices_kept_ingredient_subset() {
        let store = Store::new();
        let recipe = store.recipe(1).unwrap();
        let kept: Vec<_> = recipe.ingredients.iter().take(6).cloned().collect();

        let mut input = order_input(1);
        input.customized_ingredients = Some(kept);
        let order = store.create_order(input).unwrap();
        assert_eq!(order.total, 29925);
    }

    #[test]
    fn create_order_scales_total_by_servings() {
        let store = Store::new();
        let mut input = order_input(1);
        input.serving_count = Some(4);
        let order = store.create_order(input).unwrap();
        assert_eq!(order.serving_count, 4);
        assert_eq!(order.total, 79800);
    }

    #[test]
    fn create_order_against_missing_recipe_stores_nothing() {
        let store = Store::new();
        let err = store.create_order(order_input(999)).unwrap_err();
        assert!(matches!(err, OrderError::RecipeNotFound(999)));
        assert_eq!(store.order_count(), 0);

        // The failed attempt must not consume an id.
        let order = store.create_order(order_input(1)).unwrap();
        assert_eq!(order.id, 1);
    }

    #[test]
    fn order_ids_increase_and_are_never_reused() {
        let store = Store::new();
        let first = store.create_order(order_input(1)).unwrap();
        let second = store.create_order(order_input(2)).unwrap();
        let third = store.create_order(order_input(3)).unwrap();
        assert_eq!(
            vec![first.id, second.id, third.id],
            vec![1, 2, 3],
        );
        assert_eq!(store.order_count(), 3);
    }

    #[test]
    fn identical_orders_price_identically() {
        let store = Store::new();
        let first = store.create_order(order_input(2)).unwrap();
        let second = store.create_order(order_input(2)).unwrap();
        assert_eq!(first.total, second.total);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn waitlist_entries_are_stamped_and_ordered() {
        let store = Store::new();
        let before = Utc::now();
        let first = store.join_waitlist(JoinWaitlist {
            name: "Asha".to_owned(),
            email: "a@x.com".to_owned(),
            phone: None,
        });
        let second = store.join_waitlist(JoinWaitlist {
            name: "Ravi".to_owned(),
            email: "r@x.com".to_owned(),
            phone: Some("+91 90000 00000".to_owned()),
        });

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.created_at >= before);

        let entries = store.list_waitlist();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Asha");
        assert_eq!(entries[1].name, "Ravi");
    }
}
