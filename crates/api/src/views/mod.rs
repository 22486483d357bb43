//! Server-rendered pages (maud templates).

pub mod admin;
pub mod home;
pub mod layout;
pub mod login;

use axum::response::Html;
use maud::Markup;

/// Wrap rendered markup as an HTML response body.
pub fn html(markup: Markup) -> Html<String> {
    Html(markup.into_string())
}
