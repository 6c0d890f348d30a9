//! Search history repository.
//!
//! Anonymous searches are stored without a user so they still count towards popular queries.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct SearchHistoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchHistoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn record(
        &self,
        user_id: Option<i32>,
        query: String,
    ) -> Result<entity::search_history::Model, DbErr> {
        entity::search_history::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            query: ActiveValue::Set(query),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// The user's distinct queries, most recently searched first.
    ///
    /// # Arguments
    /// - `user_id` - Searching user
    /// - `limit` - Maximum number of queries
    ///
    /// # Returns
    /// - `Ok(Vec<String>)` - Distinct queries
    /// - `Err(DbErr)` - Database error during query
    pub async fn recent(&self, user_id: i32, limit: u64) -> Result<Vec<String>, DbErr> {
        use entity::search_history::Column;

        entity::prelude::SearchHistory::find()
            .select_only()
            .column(Column::Query)
            .filter(Column::UserId.eq(user_id))
            .group_by(Column::Query)
            .order_by_desc(Column::Id.max())
            .limit(limit)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    pub async fn clear(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::SearchHistory::delete_many()
            .filter(entity::search_history::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Most frequent queries since `since` with their counts, ties broken alphabetically.
    ///
    /// # Arguments
    /// - `since` - Start of the counting window
    /// - `limit` - Maximum number of queries
    ///
    /// # Returns
    /// - `Ok(Vec<(query, count)>)` - Queries with how often they were searched
    /// - `Err(DbErr)` - Database error during query
    pub async fn popular(
        &self,
        since: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<(String, i64)>, DbErr> {
        use entity::search_history::Column;

        entity::prelude::SearchHistory::find()
            .select_only()
            .column(Column::Query)
            .column_as(Column::Id.count(), "count")
            .filter(Column::CreatedAt.gte(since))
            .group_by(Column::Query)
            .order_by_desc(Column::Id.count())
            .order_by_asc(Column::Query)
            .limit(limit)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await
    }
}
