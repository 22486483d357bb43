//! Request handlers, grouped by resource.

pub mod admin;
pub mod auth;
pub mod effects;
pub mod pages;
pub mod profile;
