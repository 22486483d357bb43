//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- session token generation and validation.
//! - [`session`] -- the HttpOnly cookie carrying the token for HTML pages.

pub mod jwt;
pub mod password;
pub mod session;
