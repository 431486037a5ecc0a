//! Input validation helpers for write endpoints.

use validator::ValidateEmail;

/// Longest accepted comment, in characters.
pub const MAX_COMMENT_CHARS: usize = 2000;

/// Validate free-text comment content.
pub fn validate_comment_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("Comment content must not be empty".to_string());
    }
    if content.chars().count() > MAX_COMMENT_CHARS {
        return Err(format!(
            "Comment content must be at most {MAX_COMMENT_CHARS} characters"
        ));
    }
    Ok(())
}

/// Validate a price-alert email address.
pub fn validate_alert_email(email: &str) -> Result<(), String> {
    if !email.validate_email() {
        return Err(format!("'{email}' is not a valid email address"));
    }
    Ok(())
}

/// Validate a price-alert threshold (nightly price, in whole dollars).
pub fn validate_alert_threshold(threshold: i64) -> Result<(), String> {
    if threshold < 1 {
        return Err(format!("threshold must be positive, got {threshold}"));
    }
    Ok(())
}

/// Validate an itinerary entry title.
pub fn validate_itinerary_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Itinerary title must not be empty".to_string());
    }
    Ok(())
}

/// Validate an itinerary entry cost.
pub fn validate_itinerary_cost(cost: i64) -> Result<(), String> {
    if cost < 0 {
        return Err(format!("cost must not be negative, got {cost}"));
    }
    Ok(())
}
