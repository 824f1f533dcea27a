mod health;
mod orders;
mod recipes;
mod waitlist;

pub use health::{health, ready};
pub use orders::{get_order_detail, post_create_order};
pub use recipes::{get_recipe_detail, get_recipe_list};
pub use waitlist::{get_waitlist_list, post_join_waitlist};

use std::sync::Arc;

use crate::store::Store;

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}
