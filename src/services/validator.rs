//! Field rules for submitted bookmark payloads.
//!
//! The same rules apply to create and update, since an update replaces every
//! editable field. All failures are collected in field order: url, title,
//! description, tags.

use serde_json::Value;
use url::Url;

use crate::types::bookmark::{BookmarkField, BookmarkInput, FieldError, TagsInput, ValidationErrorKind};

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MAX_TAGS: usize = 5;

/// Validates a candidate payload. An empty list means the payload is acceptable.
pub fn validate_bookmark(input: &BookmarkInput) -> Vec<FieldError> {
    let mut errors = Vec::new();

    let url = input.url.as_deref().map(str::trim).unwrap_or("");
    if url.is_empty() {
        errors.push(FieldError::new(BookmarkField::Url, ValidationErrorKind::Required));
    } else if !is_valid_url(url) {
        errors.push(FieldError::new(BookmarkField::Url, ValidationErrorKind::InvalidUrl));
    }

    let title = input.title.as_deref().map(str::trim).unwrap_or("");
    if title.is_empty() {
        errors.push(FieldError::new(BookmarkField::Title, ValidationErrorKind::Required));
    } else if title.chars().count() > MAX_TITLE_LEN {
        errors.push(FieldError::new(
            BookmarkField::Title,
            ValidationErrorKind::TooLong { max: MAX_TITLE_LEN },
        ));
    }

    if let Some(description) = input.description.as_deref() {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            errors.push(FieldError::new(
                BookmarkField::Description,
                ValidationErrorKind::TooLong { max: MAX_DESCRIPTION_LEN },
            ));
        }
    }

    match &input.tags {
        None => {}
        Some(TagsInput::Malformed(_)) => {
            errors.push(FieldError::new(BookmarkField::Tags, ValidationErrorKind::NotAList));
        }
        Some(TagsInput::List(tags)) => {
            if tags.len() > MAX_TAGS {
                errors.push(FieldError::new(
                    BookmarkField::Tags,
                    ValidationErrorKind::TooMany { max: MAX_TAGS },
                ));
            }
            if !tags.iter().all(is_valid_tag) {
                errors.push(FieldError::new(BookmarkField::Tags, ValidationErrorKind::NotLowercase));
            }
        }
    }

    errors
}

/// An absolute URL with a scheme and a non-empty host.
pub fn is_valid_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(parsed) => parsed.host_str().is_some_and(|h| !h.is_empty()),
        Err(_) => false,
    }
}

fn is_valid_tag(tag: &Value) -> bool {
    match tag.as_str() {
        Some(raw) => {
            let trimmed = raw.trim();
            !trimmed.is_empty() && trimmed == trimmed.to_lowercase()
        }
        None => false,
    }
}
