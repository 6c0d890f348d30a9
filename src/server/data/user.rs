//! User data repository.
//!
//! Customer, seller and admin accounts share this table; the role column tells them apart.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use std::collections::HashMap;

use crate::server::model::user::{CreateUserParam, Role};

/// Repository providing database operations for user accounts.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// The email must already be normalised and the password hashed by the caller.
    ///
    /// # Arguments
    /// - `param` - Name, email, password hash, role and optional phone
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored user
    /// - `Err(DbErr)` - Database error, including a duplicate email
    pub async fn create(&self, param: CreateUserParam) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role),
            phone: ActiveValue::Set(param.phone),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Looks up a user by an already normalised email.
    ///
    /// # Arguments
    /// - `email` - Lowercased, trimmed email address
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The matching user
    /// - `Ok(None)` - No account uses this email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let count = self.count(Some(Role::Admin)).await?;
        Ok(count > 0)
    }

    /// Counts users, optionally only those with `role`.
    ///
    /// # Arguments
    /// - `role` - Role to filter on, or `None` for every account
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of matching users
    /// - `Err(DbErr)` - Database error during count
    pub async fn count(&self, role: Option<Role>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::User::find();
        if let Some(role) = role {
            query = query.filter(entity::user::Column::Role.eq(role));
        }
        query.count(self.db).await
    }

    /// Maps user ids to display names, skipping ids that don't exist.
    ///
    /// # Arguments
    /// - `ids` - User ids to resolve
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, String>)` - Name per found id
    /// - `Err(DbErr)` - Database error during query
    pub async fn names_by_ids(&self, ids: Vec<i32>) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(|u| (u.id, u.name)).collect())
    }
}
