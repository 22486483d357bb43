//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the signed-in admin, from a Bearer token or the
//!   session cookie.

pub mod auth;
