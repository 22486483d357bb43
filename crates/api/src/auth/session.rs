//! Session cookie for the HTML pages.

use axum_extra::extract::cookie::{Cookie, SameSite};

/// Name of the cookie holding the session token.
pub const SESSION_COOKIE: &str = "folio_session";

/// HttpOnly cookie carrying `token`, scoped to the whole site.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie used to remove the session (must match the original path).
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}
