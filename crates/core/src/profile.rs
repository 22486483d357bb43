//! The portfolio profile: the single record the public page displays and the
//! admin form edits.
//!
//! The row is a singleton addressed by [`PROFILE_ROW_ID`]. List-typed fields
//! (`roles`, `projects`, `social_links`) are always replaced wholesale.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Fixed key of the singleton profile row.
pub const PROFILE_ROW_ID: DbId = 1;

/// Avatar shown before the first successful profile fetch.
pub const FALLBACK_AVATAR_PATH: &str = "/static/profile.jpg";

/// Default re-scramble interval for the name widget, in milliseconds.
pub const DEFAULT_NAME_SPEED_MS: i32 = 8000;

/// Default hold duration per rotating phrase, in milliseconds.
pub const DEFAULT_ROLE_SPEED_MS: i32 = 4000;

/// Smallest accepted `name_speed` / `role_speed`, in milliseconds.
pub const MIN_SPEED_MS: i32 = 1;

const FALLBACK_FULL_NAME: &str = "YOUR NAME";
const FALLBACK_ROLE: &str = "Software Developer";

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A portfolio project card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(rename = "techStack", default)]
    pub tech_stack: Vec<String>,
    pub link: String,
}

/// A social link shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Free-text platform tag, mapped to an icon by [`SocialPlatform::from_tag`].
    pub platform: String,
    pub url: String,
}

impl SocialLink {
    pub fn kind(&self) -> SocialPlatform {
        SocialPlatform::from_tag(&self.platform)
    }

    /// Link target for an anchor; bare email addresses become `mailto:` links.
    pub fn href(&self) -> String {
        if self.kind() == SocialPlatform::Email && !self.url.starts_with("mailto:") {
            format!("mailto:{}", self.url)
        } else {
            self.url.clone()
        }
    }
}

/// The profile record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: DbId,
    pub full_name: String,
    pub roles: Vec<String>,
    pub about_text: String,
    pub avatar_url: String,
    pub resume_url: Option<String>,
    /// Re-scramble interval for the name widget (ms).
    pub name_speed: i32,
    /// Hold duration per rotating phrase (ms).
    pub role_speed: i32,
    pub projects: Vec<Project>,
    pub social_links: Vec<SocialLink>,
    pub updated_at: Option<Timestamp>,
}

impl Profile {
    /// Display values used when the profile cannot be read.
    pub fn fallback() -> Self {
        Self {
            id: PROFILE_ROW_ID,
            full_name: FALLBACK_FULL_NAME.to_string(),
            roles: vec![FALLBACK_ROLE.to_string()],
            about_text: String::new(),
            avatar_url: FALLBACK_AVATAR_PATH.to_string(),
            resume_url: None,
            name_speed: DEFAULT_NAME_SPEED_MS,
            role_speed: DEFAULT_ROLE_SPEED_MS,
            projects: Vec::new(),
            social_links: Vec::new(),
            updated_at: None,
        }
    }

    /// Return a copy of this profile with every field replaced by `update`.
    pub fn with_update(&self, update: &ProfileUpdate) -> Self {
        Self {
            id: self.id,
            full_name: update.full_name.clone(),
            roles: update.roles.clone(),
            about_text: update.about_text.clone(),
            avatar_url: update.avatar_url.clone(),
            resume_url: update.resume_url.clone(),
            name_speed: update.name_speed,
            role_speed: update.role_speed,
            projects: update.projects.clone(),
            social_links: update.social_links.clone(),
            updated_at: Some(chrono::Utc::now()),
        }
    }

    /// Name widget re-scramble interval as a [`Duration`].
    pub fn name_interval(&self) -> Duration {
        millis(self.name_speed)
    }

    /// Rotation widget hold duration as a [`Duration`].
    pub fn role_hold(&self) -> Duration {
        millis(self.role_speed)
    }

    /// Roles joined back into the comma-separated form field value.
    pub fn roles_input(&self) -> String {
        join_list(&self.roles)
    }
}

/// Full replacement of every editable column of the profile row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub full_name: String,
    pub roles: Vec<String>,
    pub about_text: String,
    pub avatar_url: String,
    pub resume_url: Option<String>,
    pub name_speed: i32,
    pub role_speed: i32,
    pub projects: Vec<Project>,
    pub social_links: Vec<SocialLink>,
}

// ---------------------------------------------------------------------------
// Social platforms
// ---------------------------------------------------------------------------

/// Known social platforms, resolved from the free-text tag on a [`SocialLink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    GitHub,
    LinkedIn,
    Email,
    Twitter,
    Website,
    Other,
}

impl SocialPlatform {
    /// Resolve a tag case-insensitively. Unknown tags map to [`Self::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "github" | "gh" => Self::GitHub,
            "linkedin" => Self::LinkedIn,
            "email" | "mail" | "e-mail" => Self::Email,
            "twitter" | "x" => Self::Twitter,
            "website" | "web" | "blog" | "homepage" => Self::Website,
            _ => Self::Other,
        }
    }

    /// CSS icon key used by the public page.
    pub fn icon(self) -> &'static str {
        match self {
            Self::GitHub => "icon-github",
            Self::LinkedIn => "icon-linkedin",
            Self::Email => "icon-mail",
            Self::Twitter => "icon-twitter",
            Self::Website => "icon-globe",
            Self::Other => "icon-link",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Email => "Email",
            Self::Twitter => "Twitter",
            Self::Website => "Website",
            Self::Other => "Link",
        }
    }
}

// ---------------------------------------------------------------------------
// Form helpers
// ---------------------------------------------------------------------------

/// Split a comma-separated form value into trimmed, non-empty items, keeping
/// their order.
///
/// ```
/// use folio_core::profile::parse_list;
///
/// assert_eq!(parse_list("A, B , C"), vec!["A", "B", "C"]);
/// assert!(parse_list(" , ").is_empty());
/// ```
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`parse_list`] for display in a form field.
pub fn join_list(items: &[String]) -> String {
    items.join(", ")
}

/// Reject an animation speed below [`MIN_SPEED_MS`].
pub fn validate_speed(field: &str, ms: i32) -> Result<(), CoreError> {
    if ms < MIN_SPEED_MS {
        return Err(CoreError::Validation(format!(
            "'{field}' must be at least {MIN_SPEED_MS} ms, got {ms}"
        )));
    }
    Ok(())
}

/// Convert a millisecond setting into a [`Duration`], treating non-positive
/// values as one millisecond.
pub fn millis(ms: i32) -> Duration {
    Duration::from_millis(u64::try_from(ms).unwrap_or(0).max(1))
}
