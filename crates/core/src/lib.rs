//! Core types for dinefind
//!
//! Restaurant records, text normalization, the immutable restaurant table
//! and the filter-and-rank query engine shared by the service, HTTP and CLI
//! crates.

mod constants;
mod engine;
mod env_config;
mod error;
mod normalize;
mod query;
mod restaurant;
mod table;

pub use constants::*;
pub use engine::QueryEngine;
pub use env_config::{env_parse_with_default, env_string_with_default};
pub use error::*;
pub use normalize::normalize_text;
pub use query::{CuisineFilter, QueryError, QueryOutcome, RestaurantQuery};
pub use restaurant::{Restaurant, RestaurantSummary};
pub use table::{RestaurantTable, TableStats};
