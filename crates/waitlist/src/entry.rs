use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An early-access signup. Lead capture only, unrelated to the order flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Stamped by the store at insertion, never client-supplied.
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields for a waitlist signup.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JoinWaitlist {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    pub phone: Option<String>,
}
