use crate::error::AppError;

pub const MAX_CONTENT_BYTES: usize = 1_000_000;
pub const MAX_SLUG_CHARS: usize = 128;
pub const MAX_LIST_ENTRIES: usize = 32;
pub const MAX_LIST_ENTRY_CHARS: usize = 64;

/// Validate a trimmed title (1-256 Unicode characters).
pub fn validate_title(title: &str) -> Result<(), AppError> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > 256 {
        return Err(AppError::Validation(
            "Title must be 1-256 characters".into(),
        ));
    }
    Ok(())
}

/// Validate a URL slug: lowercase ASCII letters, digits and single hyphens,
/// neither starting nor ending with a hyphen.
pub fn validate_slug(slug: &str) -> Result<(), AppError> {
    if slug.is_empty() || slug.len() > MAX_SLUG_CHARS {
        return Err(AppError::Validation(format!(
            "Slug must be 1-{MAX_SLUG_CHARS} characters"
        )));
    }
    let well_formed = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--");
    if !well_formed {
        return Err(AppError::Validation(
            "Slug must contain only lowercase letters, digits, and single hyphens".into(),
        ));
    }
    Ok(())
}

/// Reject empty or whitespace-only text.
pub fn validate_required(value: &str, name: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{name} must not be empty")));
    }
    Ok(())
}

/// Markdown bodies: non-empty and at most 1MB.
pub fn validate_content(content: &str) -> Result<(), AppError> {
    if content.trim().is_empty() || content.len() > MAX_CONTENT_BYTES {
        return Err(AppError::Validation(
            "Content must be non-empty and at most 1MB".into(),
        ));
    }
    Ok(())
}

/// Tag-like lists: bounded length, every entry non-blank and short.
pub fn validate_labels(labels: &[String], name: &str) -> Result<(), AppError> {
    if labels.len() > MAX_LIST_ENTRIES {
        return Err(AppError::Validation(format!(
            "Too many {name}: max {MAX_LIST_ENTRIES}"
        )));
    }
    for label in labels {
        let label = label.trim();
        if label.is_empty() || label.chars().count() > MAX_LIST_ENTRY_CHARS {
            return Err(AppError::Validation(format!(
                "Each of {name} must be 1-{MAX_LIST_ENTRY_CHARS} characters"
            )));
        }
    }
    Ok(())
}

/// Optional links must be absolute http(s) URLs when present.
pub fn validate_optional_url(url: Option<&str>, name: &str) -> Result<(), AppError> {
    if let Some(url) = url
        && !(url.starts_with("https://") || url.starts_with("http://"))
    {
        return Err(AppError::Validation(format!(
            "{name} must be an http(s) URL"
        )));
    }
    Ok(())
}
