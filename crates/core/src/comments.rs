//! Comment validation.

/// Maximum length of a comment body in characters.
pub const MAX_COMMENT_LENGTH: usize = 10_000;

/// Validate a comment body: non-blank and within the length limit.
pub fn validate_comment_body(body: &str) -> Result<(), String> {
    if body.trim().is_empty() {
        return Err("Comment cannot be empty".to_string());
    }
    if body.len() > MAX_COMMENT_LENGTH {
        return Err(format!(
            "Comment exceeds maximum length of {MAX_COMMENT_LENGTH} characters"
        ));
    }
    Ok(())
}
