//! Validation rules referenced by the action layer
//!
//! Schemas stay pure descriptions; these checks run before any store call
//! and their messages go straight into the result envelope.

/// Require a non-blank value. `label` is the user-facing field name.
pub fn required(label: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{label} is required"))
    } else {
        Ok(())
    }
}

/// Syntactic email check: local part, one `@`, dotted domain, no whitespace.
pub fn email(value: &str) -> Result<(), String> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err("Email address is invalid".to_string())
    }
}

/// Slugs are lowercase ASCII letters, digits, and hyphens.
pub fn slug(value: &str) -> Result<(), String> {
    let valid = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if valid {
        Ok(())
    } else {
        Err("Slug may only contain lowercase letters, digits, and hyphens".to_string())
    }
}

/// Clamp a testimonial rating into 1..=5.
pub fn clamp_rating(value: i64) -> i64 {
    value.clamp(1, 5)
}

/// Clamp a skill proficiency into 0..=100.
pub fn clamp_proficiency(value: i64) -> i64 {
    value.clamp(0, 100)
}
