//! Server-rendered user list and detail pages

use askama::Template;
use axum::{
    extract::{Path, RawQuery, State},
    response::Html,
};

use roster_core::pagination::{PageRequest, QueryParams};

use crate::server::AppState;
use crate::templates::{UserDetailTemplate, UsersTemplate};
use crate::{Error, Result};

/// Parse a raw query string into untyped parameters
///
/// Repeated keys survive as multi-values so the resolver can ignore them;
/// an unparseable query degrades to no parameters.
pub(crate) fn query_params(raw: Option<&str>) -> QueryParams {
    let pairs: Vec<(String, String)> = raw
        .and_then(|query| serde_urlencoded::from_str(query).ok())
        .unwrap_or_default();
    QueryParams::from_pairs(pairs)
}

/// Paginated, searchable user list
pub async fn list(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Html<String>> {
    let params = query_params(query.as_deref());
    let request = PageRequest::from_params(&params);

    let total_items = state.storage.users().count(request.search()).await?;
    let page = request.resolve(total_items as u64, state.page_size);

    let users = state
        .storage
        .users()
        .list_page(page.search(), page.offset(), page.limit())
        .await?;

    let template = UsersTemplate::new(users, &page);
    Ok(Html(template.render()?))
}

/// Single user detail page
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>> {
    let user = state
        .storage
        .users()
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("User with id {}", id)))?;

    let template = UserDetailTemplate::new(user);
    Ok(Html(template.render()?))
}
