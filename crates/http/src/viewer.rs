//! Search page - embedded HTML form for `/recommend`
//!
//! Served at `/`; submits the filters with `fetch` and renders the ranked
//! list, the "no results" message or the error message.

use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

/// Embedded HTML for the search page
pub const SEARCH_PAGE_HTML: &str = include_str!("search.html");

/// Serve the search page
pub async fn serve_search_page() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(SEARCH_PAGE_HTML))
        .into_response()
}
