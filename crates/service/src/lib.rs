//! Service layer for dinefind
//!
//! Sits between the HTTP/CLI front ends and the core query engine: turns raw
//! request parameters into typed queries and runs them off the async executor.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod error;
mod params;
mod recommend_service;

pub use error::ServiceError;
pub use params::{RecommendParams, parse_cost};
pub use recommend_service::RecommendService;
