//! Query parameters and the structured query outcome.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::NO_RESULTS_MESSAGE;
use crate::restaurant::RestaurantSummary;

/// Filter parameters for a single query. Every filter is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantQuery {
    pub city: Option<String>,
    pub locality: Option<String>,
    /// Inclusive lower bound on `average_cost_for_two`.
    pub min_cost: Option<f64>,
    /// Inclusive upper bound on `average_cost_for_two`.
    pub max_cost: Option<f64>,
    pub cuisine: Option<CuisineFilter>,
}

impl RestaurantQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn locality(mut self, locality: impl Into<String>) -> Self {
        self.locality = Some(locality.into());
        self
    }

    #[must_use]
    pub fn min_cost(mut self, min_cost: f64) -> Self {
        self.min_cost = Some(min_cost);
        self
    }

    #[must_use]
    pub fn max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    /// Sets the cuisine filter from a single value or a comma-separated list.
    /// A value with no non-empty tokens clears the filter.
    #[must_use]
    pub fn cuisine(mut self, raw: &str) -> Self {
        self.cuisine = CuisineFilter::parse(raw);
        self
    }
}

/// Cuisine tokens matched by substring against a record's `cuisines` text.
///
/// A record matches when ANY token occurs in it, so `"indian"` matches
/// `"north indian, chinese"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuisineFilter {
    tokens: Vec<String>,
}

impl CuisineFilter {
    /// Splits `raw` on commas. Tokens are trimmed and lowercased; empty ones
    /// are dropped. Returns `None` when nothing is left.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::from_tokens(raw.split(','))
    }

    /// Builds a filter from tokens that were already split by the caller.
    pub fn from_tokens<I, S>(tokens: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens: Vec<String> = tokens
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        if tokens.is_empty() { None } else { Some(Self { tokens }) }
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn matches(&self, cuisines: &str) -> bool {
        self.tokens.iter().any(|t| cuisines.contains(t.as_str()))
    }
}

/// Failure while evaluating a query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("{field} must be a finite number, got {value}")]
    NonFiniteBound { field: &'static str, value: f64 },
}

/// Result of a query: matches, an explicit "nothing matched", or an error.
///
/// Serialized with a `status` tag: `ok`, `no_results` or `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome {
    #[serde(rename = "ok")]
    Found { restaurants: Vec<RestaurantSummary> },
    NoResults { message: String },
    Error { message: String },
}

impl QueryOutcome {
    #[must_use]
    pub fn no_results() -> Self {
        Self::NoResults { message: NO_RESULTS_MESSAGE.to_owned() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error { message: message.into() }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    #[must_use]
    pub const fn is_no_results(&self) -> bool {
        matches!(self, Self::NoResults { .. })
    }

    /// Matched restaurants; empty for the other outcomes.
    #[must_use]
    pub fn restaurants(&self) -> &[RestaurantSummary] {
        match self {
            Self::Found { restaurants } => restaurants.as_slice(),
            Self::NoResults { .. } | Self::Error { .. } => &[],
        }
    }
}

impl From<QueryError> for QueryOutcome {
    fn from(err: QueryError) -> Self {
        Self::error(err.to_string())
    }
}
