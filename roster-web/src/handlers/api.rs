//! JSON API endpoints

use axum::{
    extract::{RawQuery, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use roster_core::pagination::PageRequest;

use crate::handlers::users::query_params;
use crate::server::AppState;
use crate::Result;

/// Maximum page size accepted from API clients
const MAX_PER_PAGE: u32 = 100;

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> Result<impl IntoResponse> {
    state.storage.health_check().await?;

    Ok(Json(json!({
        "status": "healthy",
        "service": "roster-web",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

/// Paginated user list as JSON
pub async fn users_list(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse> {
    let params = query_params(query.as_deref());
    let request = PageRequest::from_params(&params);

    // API clients may narrow or widen the page, within bounds
    let page_size = params
        .single("per_page")
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .filter(|size| *size >= 1)
        .map(|size| size.min(MAX_PER_PAGE))
        .unwrap_or(state.page_size);

    let total_items = state.storage.users().count(request.search()).await?;
    let page = request.resolve(total_items as u64, page_size);

    let users = state
        .storage
        .users()
        .list_page(page.search(), page.offset(), page.limit())
        .await?;

    Ok(Json(json!({
        "users": users,
        "page": page.page(),
        "per_page": page.page_size(),
        "total": page.total_items(),
        "total_pages": page.total_pages(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

/// Aggregate statistics endpoint
pub async fn stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let stats = state.storage.stats().await?;

    Ok(Json(json!({
        "users": stats.users_count,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
