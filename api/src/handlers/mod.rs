//! API Handlers Module
//!
//! The web shell has a single page. Submitting the form re-requests the same
//! route with the three answers in the query string.

use axum::{debug_handler, extract::Query, response::Html};

use crate::models::RecommendQuery;
use crate::page::render_page;

/// Questionnaire page, with a recommendation when answers are present
///
/// The query is taken as raw pairs so that repeated or unexpected keys never
/// reject the request.
#[debug_handler]
pub async fn index(Query(pairs): Query<Vec<(String, String)>>) -> Html<String> {
    let requirement = RecommendQuery::from_pairs(pairs).requirement();

    match requirement {
        Some(ref requirement) => tracing::debug!(
            dataset_size = %requirement.dataset_size,
            priority = %requirement.priority,
            hardware = %requirement.hardware,
            "Rendering recommendation page"
        ),
        None => tracing::debug!("Rendering questionnaire page"),
    }

    Html(render_page(requirement.as_ref()))
}
