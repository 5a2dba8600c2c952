//! Typed error enum for the service layer.

use dinefind_core::CoreError;
use thiserror::Error;

/// Service-layer error for request parameters and table loading.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller provided a parameter that cannot be turned into a query.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The restaurant table could not be built.
    #[error("table: {0}")]
    Table(#[from] CoreError),
}
