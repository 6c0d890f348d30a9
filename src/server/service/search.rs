use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{product::ProductRepository, search_history::SearchHistoryRepository},
    error::AppError,
    model::search::{
        normalize_query, PopularSearch, Suggestion, SuggestionKind, MAX_SUGGESTIONS,
        POPULAR_LIMIT, POPULAR_WINDOW_DAYS, RECENT_LIMIT,
    },
};

pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Suggests product names first, then brands and categories containing the query.
    pub async fn autocomplete(&self, query: &str) -> Result<Vec<Suggestion>, AppError> {
        let repo = ProductRepository::new(self.db);

        let Some(query) = normalize_query(query) else {
            return Ok(Vec::new());
        };

        let mut suggestions: Vec<Suggestion> = repo
            .search_names(&query, MAX_SUGGESTIONS as u64)
            .await?
            .into_iter()
            .map(|product| Suggestion {
                kind: SuggestionKind::Product,
                text: product.name,
                product_id: Some(product.id),
            })
            .collect();

        let remaining = MAX_SUGGESTIONS.saturating_sub(suggestions.len()) as u64;
        if remaining > 0 {
            for brand in repo.distinct_brands(&query, remaining).await? {
                suggestions.push(Suggestion {
                    kind: SuggestionKind::Brand,
                    text: brand,
                    product_id: None,
                });
            }
        }

        let remaining = MAX_SUGGESTIONS.saturating_sub(suggestions.len()) as u64;
        if remaining > 0 {
            for category in repo.distinct_categories(&query, remaining).await? {
                suggestions.push(Suggestion {
                    kind: SuggestionKind::Category,
                    text: category,
                    product_id: None,
                });
            }
        }

        Ok(suggestions)
    }

    /// Records a search; queries too short to be useful are skipped.
    pub async fn record(&self, user_id: i32, query: &str) -> Result<(), AppError> {
        let repo = SearchHistoryRepository::new(self.db);

        if let Some(query) = normalize_query(query) {
            repo.record(Some(user_id), query).await?;
        }

        Ok(())
    }

    /// Like `record`, but only logs failures.
    pub async fn record_quietly(&self, user_id: i32, query: &str) {
        if let Err(e) = self.record(user_id, query).await {
            tracing::warn!("Failed to record search for user {}: {}", user_id, e);
        }
    }

    /// The user's latest distinct queries, newest first.
    pub async fn recent(&self, user_id: i32) -> Result<Vec<String>, AppError> {
        let repo = SearchHistoryRepository::new(self.db);

        Ok(repo.recent(user_id, RECENT_LIMIT as u64).await?)
    }

    pub async fn clear_recent(&self, user_id: i32) -> Result<(), AppError> {
        let repo = SearchHistoryRepository::new(self.db);

        repo.clear(user_id).await?;

        Ok(())
    }

    /// Most frequent queries across all shoppers over the recent window.
    pub async fn popular(&self) -> Result<Vec<PopularSearch>, AppError> {
        let repo = SearchHistoryRepository::new(self.db);

        let since = Utc::now() - Duration::days(POPULAR_WINDOW_DAYS);
        let rows = repo.popular(since, POPULAR_LIMIT).await?;

        Ok(rows
            .into_iter()
            .map(|(query, count)| PopularSearch {
                query,
                count: count.max(0) as u64,
            })
            .collect())
    }
}
