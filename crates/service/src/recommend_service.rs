//! Async entry point for restaurant recommendations.

use std::path::Path;
use std::sync::Arc;

use dinefind_core::{QueryEngine, QueryOutcome, RestaurantQuery, RestaurantTable, TableStats};

use crate::{RecommendParams, ServiceError};

/// Shares one [`QueryEngine`] between async callers.
///
/// Queries run on the blocking pool; a panicked query comes back as an error
/// outcome rather than tearing down the caller.
pub struct RecommendService {
    engine: Arc<QueryEngine>,
}

impl RecommendService {
    #[must_use]
    pub const fn new(engine: Arc<QueryEngine>) -> Self {
        Self { engine }
    }

    #[must_use]
    pub fn from_table(table: RestaurantTable) -> Self {
        Self::new(Arc::new(QueryEngine::new(table)))
    }

    /// Loads the dataset at `path` and builds a service over it.
    pub fn load(path: &Path) -> Result<Self, ServiceError> {
        Ok(Self::from_table(RestaurantTable::load(path)?))
    }

    /// Runs `query` on the blocking pool.
    ///
    /// Always yields a structured outcome: a panicked or cancelled query task
    /// becomes [`QueryOutcome::Error`].
    pub async fn recommend(&self, query: RestaurantQuery) -> QueryOutcome {
        let engine = Arc::clone(&self.engine);
        match tokio::task::spawn_blocking(move || engine.query(&query)).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "query task failed");
                QueryOutcome::error(format!("query failed: {e}"))
            },
        }
    }

    /// Parses `params` and runs the resulting query.
    pub async fn recommend_params(
        &self,
        params: RecommendParams,
    ) -> Result<QueryOutcome, ServiceError> {
        let query = params.into_query()?;
        Ok(self.recommend(query).await)
    }

    #[must_use]
    pub fn stats(&self) -> TableStats {
        self.engine.table().stats()
    }
}
