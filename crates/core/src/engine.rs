//! Filter-and-rank query engine over the restaurant table.

use crate::constants::MAX_RESULTS;
use crate::normalize::normalize_text;
use crate::query::{QueryError, QueryOutcome, RestaurantQuery};
use crate::restaurant::{Restaurant, RestaurantSummary};
use crate::table::RestaurantTable;

/// Answers filter-and-rank queries against a shared, immutable table.
///
/// Queries never mutate the table; each one builds a transient view of
/// matching records, so a single engine can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    table: RestaurantTable,
}

impl QueryEngine {
    #[must_use]
    pub const fn new(table: RestaurantTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub const fn table(&self) -> &RestaurantTable {
        &self.table
    }

    /// Runs `query` and folds every failure into [`QueryOutcome::Error`].
    #[must_use]
    pub fn query(&self, query: &RestaurantQuery) -> QueryOutcome {
        match self.try_query(query) {
            Ok(restaurants) if restaurants.is_empty() => {
                tracing::debug!(?query, "query matched nothing");
                QueryOutcome::no_results()
            },
            Ok(restaurants) => {
                tracing::debug!(?query, matches = restaurants.len(), "query answered");
                QueryOutcome::Found { restaurants }
            },
            Err(e) => {
                tracing::warn!(error = %e, ?query, "query rejected");
                e.into()
            },
        }
    }

    /// Filters in fixed order (city, locality, min cost, max cost, cuisine),
    /// sorts by rating descending keeping table order for ties, and returns
    /// at most [`MAX_RESULTS`] summaries.
    pub fn try_query(
        &self,
        query: &RestaurantQuery,
    ) -> Result<Vec<RestaurantSummary>, QueryError> {
        check_bound("min_cost", query.min_cost)?;
        check_bound("max_cost", query.max_cost)?;

        let city = filter_value(query.city.as_deref());
        let locality = filter_value(query.locality.as_deref());

        let mut matches: Vec<&Restaurant> = self
            .table
            .records()
            .iter()
            .zip(self.table.city_keys())
            .filter(|(_, key)| city.as_ref().is_none_or(|c| *key == c))
            .map(|(r, _)| r)
            .filter(|r| locality.as_ref().is_none_or(|l| r.locality == *l))
            .filter(|r| query.min_cost.is_none_or(|min| r.average_cost_for_two >= min))
            .filter(|r| query.max_cost.is_none_or(|max| r.average_cost_for_two <= max))
            .filter(|r| query.cuisine.as_ref().is_none_or(|c| c.matches(&r.cuisines)))
            .collect();

        // sort_by is stable
        matches.sort_by(|a, b| b.aggregate_rating.total_cmp(&a.aggregate_rating));

        Ok(matches.into_iter().take(MAX_RESULTS).map(Restaurant::summary).collect())
    }
}

fn check_bound(field: &'static str, bound: Option<f64>) -> Result<(), QueryError> {
    match bound {
        Some(value) if !value.is_finite() => Err(QueryError::NonFiniteBound { field, value }),
        _ => Ok(()),
    }
}

/// Normalized filter text; blank input means the filter is absent.
fn filter_value(raw: Option<&str>) -> Option<String> {
    raw.map(normalize_text).filter(|v| !v.is_empty())
}
