//! Post field validation and publish-date formatting.

use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a post title in characters.
pub const MAX_TITLE_LENGTH: usize = 250;

/// Maximum length of a post subtitle in characters.
pub const MAX_SUBTITLE_LENGTH: usize = 250;

/// Maximum length of a cover image URL in characters.
pub const MAX_IMG_URL_LENGTH: usize = 250;

/// Maximum length of a post body in characters.
pub const MAX_BODY_LENGTH: usize = 100_000;

/// Human-readable publish date format, e.g. "August 06, 2026".
///
/// The publish date is stored as a string in exactly this shape and never
/// reinterpreted as a timestamp.
pub const PUBLISH_DATE_FORMAT: &str = "%B %d, %Y";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a post title: non-blank and within the column width.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title cannot be empty".to_string());
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a post subtitle: non-blank and within the column width.
pub fn validate_subtitle(subtitle: &str) -> Result<(), String> {
    if subtitle.trim().is_empty() {
        return Err("Subtitle cannot be empty".to_string());
    }
    if subtitle.len() > MAX_SUBTITLE_LENGTH {
        return Err(format!(
            "Subtitle exceeds maximum length of {MAX_SUBTITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a cover image URL: non-empty, http(s), within the column width.
pub fn validate_img_url(img_url: &str) -> Result<(), String> {
    if img_url.is_empty() {
        return Err("Image URL cannot be empty".to_string());
    }
    if img_url.len() > MAX_IMG_URL_LENGTH {
        return Err(format!(
            "Image URL exceeds maximum length of {MAX_IMG_URL_LENGTH} characters"
        ));
    }
    if !img_url.starts_with("http://") && !img_url.starts_with("https://") {
        return Err("Image URL must start with http:// or https://".to_string());
    }
    Ok(())
}

/// Validate a post body: non-blank and within the length limit.
pub fn validate_body(body: &str) -> Result<(), String> {
    if body.trim().is_empty() {
        return Err("Post body cannot be empty".to_string());
    }
    if body.len() > MAX_BODY_LENGTH {
        return Err(format!(
            "Post body exceeds maximum length of {MAX_BODY_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Format a timestamp as the stored publish-date string.
pub fn format_publish_date(at: Timestamp) -> String {
    at.format(PUBLISH_DATE_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
