//! HTML pages: public profile, sign-in, and the admin editor.
//!
//! Errors here never surface as JSON; they become the page's status message.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use axum_extra::extract::cookie::CookieJar;
use folio_core::profile::Profile;

use crate::auth::session::{removal_cookie, session_cookie};
use crate::error::AppError;
use crate::handlers::auth::{sign_in, LoginRequest};
use crate::handlers::profile::{load_display_profile, load_profile};
use crate::middleware::auth::AuthUser;
use crate::save::{save_profile, SaveForm};
use crate::state::AppState;
use crate::views::{self, layout::Notice};

/// Where the gate sends visitors without a session.
pub const LOGIN_PATH: &str = "/login";

/// Where a successful sign-in lands.
pub const ADMIN_PATH: &str = "/admin";

/// GET /
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let profile = load_display_profile(state.profiles.as_ref()).await;
    views::html(views::home::render(&profile))
}

/// GET /login
///
/// Already signed-in visitors go straight to the editor.
pub async fn login_page(user: Option<AuthUser>) -> Response {
    if user.is_some() {
        return Redirect::to(ADMIN_PATH).into_response();
    }
    views::html(views::login::render(None, "")).into_response()
}

/// POST /login
pub async fn login_submit(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<LoginRequest>,
) -> Response {
    match sign_in(&state, &input).await {
        Ok((_, token)) => (jar.add(session_cookie(token)), Redirect::to(ADMIN_PATH)).into_response(),
        Err(err) => {
            let (status, _, message) = err.classify();
            let page = views::login::render(Some(&message), &input.email);
            (status, views::html(page)).into_response()
        }
    }
}

/// POST /logout
pub async fn logout(jar: CookieJar, user: Option<AuthUser>) -> (CookieJar, Redirect) {
    if let Some(user) = user {
        tracing::info!(user_id = user.user_id, "Signed out");
    }
    (jar.remove(removal_cookie()), Redirect::to(LOGIN_PATH))
}

/// GET /admin
///
/// Without a session this redirects to the login page and renders nothing
/// else.
pub async fn admin_page(State(state): State<AppState>, user: Option<AuthUser>) -> Response {
    let Some(user) = user else {
        return Redirect::to(LOGIN_PATH).into_response();
    };

    match load_profile(state.profiles.as_ref()).await {
        Ok(profile) => views::html(views::admin::render(&profile, &user.email, None)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to load profile for editing");
            let notice = Notice::Error(format!("Could not load the profile: {err}"));
            let page = views::admin::render(
                &Profile::fallback(),
                &user.email,
                Some(&notice),
            );
            (StatusCode::INTERNAL_SERVER_ERROR, views::html(page)).into_response()
        }
    }
}

/// POST /admin
///
/// Runs the save and re-renders the editor with the outcome. On failure the
/// submitted values stay in the form so the user can retry.
pub async fn admin_submit(
    State(state): State<AppState>,
    user: Option<AuthUser>,
    multipart: Multipart,
) -> Response {
    let Some(user) = user else {
        return Redirect::to(LOGIN_PATH).into_response();
    };

    let form = match SaveForm::from_multipart(multipart).await {
        Ok(form) => form,
        Err(err) => return editor_error(&state, &user, None, err).await,
    };

    match save_profile(state.profiles.as_ref(), state.files.as_ref(), &form).await {
        Ok(profile) => {
            tracing::info!(user_id = user.user_id, "Profile updated via editor");
            let notice = Notice::Success("Profile updated successfully".into());
            views::html(views::admin::render(&profile, &user.email, Some(&notice))).into_response()
        }
        Err(err) => editor_error(&state, &user, Some(&form), err).await,
    }
}

async fn editor_error(
    state: &AppState,
    user: &AuthUser,
    form: Option<&SaveForm>,
    err: AppError,
) -> Response {
    let (status, _, message) = err.classify();
    tracing::warn!(error = %err, "Profile save failed");

    let stored = load_display_profile(state.profiles.as_ref()).await;
    let shown = match form {
        Some(form) => form.draft(&stored),
        None => stored,
    };
    let notice = Notice::Error(format!("Error updating profile: {message}"));
    let page = views::admin::render(&shown, &user.email, Some(&notice));
    (status, views::html(page)).into_response()
}
