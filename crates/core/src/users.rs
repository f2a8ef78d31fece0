//! User field validation and gravatar avatars.
//!
//! Column widths mirror the schema: display names up to 250 characters,
//! emails up to 100.

use std::sync::LazyLock;

use md5::{Digest, Md5};
use regex::Regex;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a display name in characters.
pub const MAX_NAME_LENGTH: usize = 250;

/// Maximum length of an email address in characters.
pub const MAX_EMAIL_LENGTH: usize = 100;

/// Gravatar image size in pixels.
pub const GRAVATAR_SIZE: u32 = 20;

/// Gravatar fallback image style.
pub const GRAVATAR_DEFAULT: &str = "retro";

/// Gravatar audience rating.
pub const GRAVATAR_RATING: &str = "g";

/// Loose email shape check: something@something.tld, no whitespace.
/// Deliverability is the mail server's problem, not ours.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex must compile")
});

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a display name: non-blank and within the column width.
pub fn validate_display_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(format!(
            "Name exceeds maximum length of {MAX_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an email address: shaped like an email and within the column width.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(format!(
            "Email exceeds maximum length of {MAX_EMAIL_LENGTH} characters"
        ));
    }
    if !EMAIL_RE.is_match(email) {
        return Err("Email address is not valid".to_string());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Gravatar
// ---------------------------------------------------------------------------

/// Gravatar URL for an email address.
///
/// The address is trimmed and lowercased before hashing, per the gravatar
/// protocol. Size, rating, and fallback match the comment avatars shown on
/// post pages.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let mut hasher = Md5::new();
    hasher.update(normalized.as_bytes());
    let digest = hasher.finalize();
    format!(
        "https://www.gravatar.com/avatar/{digest:x}?s={GRAVATAR_SIZE}&d={GRAVATAR_DEFAULT}&r={GRAVATAR_RATING}"
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
