//! User fixtures for creating in-memory test data.

use chrono::Utc;
use entity::user::{self, Role};

/// Default fixture email.
pub const DEFAULT_EMAIL: &str = "customer@example.com";

/// Creates a customer entity model with id 1.
pub fn entity() -> user::Model {
    entity_with_role(Role::Customer)
}

/// Creates a user entity model with id 1 and the given role.
pub fn entity_with_role(role: Role) -> user::Model {
    user::Model {
        id: 1,
        name: "Test Customer".to_string(),
        email: DEFAULT_EMAIL.to_string(),
        password_hash: "unusable".to_string(),
        role,
        phone: None,
        created_at: Utc::now(),
    }
}
