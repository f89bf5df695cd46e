//! Askama templates for the web interface

use askama::Template;

use roster_core::pagination::ResolvedPage;
use roster_core::user::User;

/// Users list template
#[derive(Template)]
#[template(path = "users.html")]
pub struct UsersTemplate {
    pub users: Vec<User>,
    pub search_value: String,
    pub page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub range_start: u64,
    pub range_end: u64,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

impl UsersTemplate {
    pub fn new(users: Vec<User>, page: &ResolvedPage) -> Self {
        Self {
            users,
            search_value: page.search().unwrap_or("").to_string(),
            page: page.page(),
            total_pages: page.total_pages(),
            total_items: page.total_items(),
            range_start: page.range_start(),
            range_end: page.range_end(),
            prev_href: page
                .prev_page()
                .map(|target| page_href(target, page.search())),
            next_href: page
                .next_page()
                .map(|target| page_href(target, page.search())),
        }
    }
}

/// User detail template
#[derive(Template)]
#[template(path = "user_detail.html")]
pub struct UserDetailTemplate {
    pub user: User,
}

impl UserDetailTemplate {
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

/// Link target for a page, preserving the active search
pub fn page_href(page: u32, search: Option<&str>) -> String {
    match search {
        Some(term) => format!("/users?page={}&search={}", page, urlencoding::encode(term)),
        None => format!("/users?page={}", page),
    }
}
