//! HTTP-level tests for the public page, the admin gate and the save flow.
//!
//! Runs against in-memory stores; no database needed.

mod common;

use std::sync::Arc;

use axum::http::{header, StatusCode};
use common::{
    body_bytes, body_json, body_string, build_app, build_fake_app, get, get_with_cookie,
    lazy_pool, png, send_multipart, session_cookie, token, FakeFiles, FakeProfiles, Multipart,
};
use folio_core::profile::{Profile, Project};

fn seeded() -> Profile {
    let mut profile = Profile::fallback();
    profile.full_name = "Ada Lovelace".into();
    profile.roles = vec!["Engineer".into(), "Writer".into()];
    profile.avatar_url = "/storage/images/avatar-1.jpg".into();
    profile.resume_url = Some("/storage/documents/resume-1.pdf".into());
    profile.projects = vec![Project {
        title: "Engine".into(),
        description: "Numbers".into(),
        tech_stack: vec!["Rust".into()],
        link: "https://example.com".into(),
    }];
    profile
}

fn bearer() -> Option<(header::HeaderName, String)> {
    Some((header::AUTHORIZATION, format!("Bearer {}", token())))
}

fn cookie() -> Option<(header::HeaderName, String)> {
    Some((header::COOKIE, session_cookie()))
}

// ---------------------------------------------------------------------------
// Public reads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn profile_api_returns_data_envelope() {
    let (app, _, _) = build_fake_app(seeded());
    let response = get(app, "/api/v1/profile").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["full_name"], "Ada Lovelace");
    assert_eq!(json["data"]["roles"][1], "Writer");
    assert_eq!(json["data"]["projects"][0]["techStack"][0], "Rust");
}

#[tokio::test]
async fn profile_api_reports_store_failure() {
    let app = build_app(
        lazy_pool(),
        Arc::new(FakeProfiles::failing()),
        Arc::new(FakeFiles::default()),
    );
    let response = get(app, "/api/v1/profile").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn home_page_renders_profile() {
    let (app, _, _) = build_fake_app(seeded());
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Ada Lovelace"));
    assert!(html.contains("/storage/documents/resume-1.pdf"));
    assert!(html.contains("/api/v1/effects/roles"));
}

#[tokio::test]
async fn home_page_falls_back_when_store_fails() {
    let app = build_app(
        lazy_pool(),
        Arc::new(FakeProfiles::failing()),
        Arc::new(FakeFiles::default()),
    );
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("YOUR NAME"));
    assert!(html.contains("/static/profile.jpg"));
}

#[tokio::test]
async fn health_reports_unreachable_database() {
    let (app, _, _) = build_fake_app(seeded());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn admin_without_session_redirects_to_login() {
    let (app, _, _) = build_fake_app(seeded());
    let response = get(app, "/admin").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn admin_with_bad_cookie_redirects_to_login() {
    let (app, _, _) = build_fake_app(seeded());
    let response = get_with_cookie(app, "/admin", "folio_session=not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn admin_with_session_renders_bound_form() {
    let (app, _, _) = build_fake_app(seeded());
    let response = get_with_cookie(app, "/admin", &session_cookie()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"value="Ada Lovelace""#));
    assert!(html.contains(r#"value="Engineer, Writer""#));
    assert!(html.contains("admin@example.com"));
}

#[tokio::test]
async fn login_page_redirects_signed_in_user() {
    let (app, _, _) = build_fake_app(seeded());
    let response = get_with_cookie(app, "/login", &session_cookie()).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/admin");
}

#[tokio::test]
async fn logout_clears_cookie() {
    let (app, _, _) = build_fake_app(seeded());
    let request = axum::http::Request::post("/logout")
        .header(header::COOKIE, session_cookie())
        .body(axum::body::Body::empty())
        .unwrap();
    let response = common::send(app, request).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/login");
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with("folio_session="));
}

#[tokio::test]
async fn admin_api_requires_auth() {
    let (app, profiles, _) = build_fake_app(seeded());
    let body = Multipart::new().text("full_name", "Mallory");
    let response = send_multipart(app, "PUT", "/api/v1/admin/profile", body, None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
    assert_eq!(profiles.update_count(), 0);
}

// ---------------------------------------------------------------------------
// Save
// ---------------------------------------------------------------------------

#[tokio::test]
async fn api_save_without_files_preserves_urls() {
    let (app, profiles, files) = build_fake_app(seeded());
    let body = Multipart::new()
        .text("full_name", "Grace Hopper")
        .text("roles", "A, B , C")
        .text("about_text", "Compilers")
        .text("name_speed", "5000")
        .text("role_speed", "2500")
        .text("project_title", "COBOL")
        .text("project_description", "Business")
        .text("project_tech", "Mainframe, English")
        .text("project_link", "https://example.com/cobol")
        .text("project_title", "")
        .text("project_description", "")
        .text("project_tech", "")
        .text("project_link", "")
        .text("social_platform", "github")
        .text("social_url", "https://github.com/grace")
        .file("avatar", "", "application/octet-stream", b"")
        .file("resume", "", "application/octet-stream", b"");

    let response = send_multipart(app, "PUT", "/api/v1/admin/profile", body, bearer()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["full_name"], "Grace Hopper");
    assert_eq!(json["data"]["roles"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["data"]["avatar_url"], "/storage/images/avatar-1.jpg");
    assert_eq!(json["data"]["resume_url"], "/storage/documents/resume-1.pdf");
    assert_eq!(json["data"]["name_speed"], 5000);
    assert_eq!(json["data"]["projects"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["social_links"][0]["platform"], "github");

    assert_eq!(files.count(), 0);
    assert_eq!(profiles.update_count(), 1);
}

#[tokio::test]
async fn editor_save_with_avatar_uploads_once() {
    let (app, profiles, files) = build_fake_app(seeded());
    let body = Multipart::new()
        .text("full_name", "Ada Lovelace")
        .text("roles", "Engineer")
        .file("avatar", "me.png", "image/png", &png(12, 12));

    let response = send_multipart(app, "POST", "/admin", body, cookie()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Profile updated successfully"));

    assert_eq!(files.count(), 1);
    let (bucket, filename, _) = files.uploads.lock().unwrap()[0].clone();
    assert_eq!(bucket, "images");
    let updates = profiles.updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].avatar_url, format!("/storage/images/{filename}"));
}

#[tokio::test]
async fn editor_crop_outside_image_keeps_form_and_store() {
    let (app, profiles, files) = build_fake_app(seeded());
    let body = Multipart::new()
        .text("full_name", "Draft Name")
        .file("avatar", "me.png", "image/png", &png(10, 10))
        .text("crop_x", "8")
        .text("crop_y", "0")
        .text("crop_width", "5")
        .text("crop_height", "5");

    let response = send_multipart(app, "POST", "/admin", body, cookie()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_string(response).await;
    assert!(html.contains("Error updating profile"));
    assert!(html.contains(r#"value="Draft Name""#));
    assert_eq!(files.count(), 0);
    assert_eq!(profiles.update_count(), 0);
}

#[tokio::test]
async fn api_save_rejects_crop_without_avatar() {
    let (app, profiles, files) = build_fake_app(seeded());
    let body = Multipart::new()
        .text("full_name", "Ada Lovelace")
        .text("crop_x", "9999")
        .text("crop_y", "9999")
        .text("crop_width", "5")
        .text("crop_height", "5");

    let response = send_multipart(app, "PUT", "/api/v1/admin/profile", body, bearer()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
    assert_eq!(files.count(), 0);
    assert_eq!(profiles.update_count(), 0);
}

#[tokio::test]
async fn api_save_rejects_non_positive_speed() {
    let (app, profiles, _) = build_fake_app(seeded());
    let body = Multipart::new()
        .text("full_name", "Ada Lovelace")
        .text("name_speed", "-5");

    let response = send_multipart(app, "PUT", "/api/v1/admin/profile", body, bearer()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(profiles.update_count(), 0);
}

#[tokio::test]
async fn api_save_rejects_unpaired_social_rows() {
    let (app, profiles, _) = build_fake_app(seeded());
    let body = Multipart::new()
        .text("full_name", "Ada Lovelace")
        .text("social_platform", "github")
        .text("social_platform", "linkedin")
        .text("social_url", "https://github.com/ada");

    let response = send_multipart(app, "PUT", "/api/v1/admin/profile", body, bearer()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(profiles.update_count(), 0);
}

#[tokio::test]
async fn editor_post_without_session_redirects() {
    let (app, profiles, _) = build_fake_app(seeded());
    let body = Multipart::new().text("full_name", "Mallory");
    let response = send_multipart(app, "POST", "/admin", body, None).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(profiles.update_count(), 0);
}

// ---------------------------------------------------------------------------
// Crop preview
// ---------------------------------------------------------------------------

#[tokio::test]
async fn crop_preview_returns_exact_dimensions() {
    let (app, _, files) = build_fake_app(seeded());
    let body = Multipart::new()
        .file("image", "big.png", "image/png", &png(40, 30))
        .text("crop_x", "10")
        .text("crop_y", "5")
        .text("crop_width", "16")
        .text("crop_height", "9")
        .text("format", "png");

    let response = send_multipart(app, "POST", "/api/v1/admin/crop", body, bearer()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    let bytes = body_bytes(response).await;
    let img = image::load_from_memory(&bytes).unwrap();
    assert_eq!((img.width(), img.height()), (16, 9));
    assert_eq!(files.count(), 0);
}

#[tokio::test]
async fn crop_preview_rejects_missing_coordinates() {
    let (app, _, _) = build_fake_app(seeded());
    let body = Multipart::new()
        .file("image", "big.png", "image/png", &png(4, 4))
        .text("crop_x", "0");

    let response = send_multipart(app, "POST", "/api/v1/admin/crop", body, bearer()).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
