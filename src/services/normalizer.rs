//! Cleans a submitted payload into the stored field values.

use serde_json::Value;

use crate::services::validator::MAX_TAGS;
use crate::types::bookmark::{BookmarkInput, TagsInput};

/// Editable bookmark fields after trimming and tag normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFields {
    pub url: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Trims text fields and normalizes tags for storage.
///
/// Absent text fields become empty strings. Tags are stringified, trimmed,
/// lowercased, blank entries dropped and the list capped at five. A malformed
/// tag value yields an empty list.
pub fn normalize(input: &BookmarkInput) -> NormalizedFields {
    NormalizedFields {
        url: trimmed(input.url.as_deref()),
        title: trimmed(input.title.as_deref()),
        description: trimmed(input.description.as_deref()),
        tags: normalize_tags(input.tags.as_ref()),
    }
}

pub fn normalize_tags(tags: Option<&TagsInput>) -> Vec<String> {
    let Some(TagsInput::List(values)) = tags else {
        return Vec::new();
    };

    let mut tags = clean_tags(values);
    tags.truncate(MAX_TAGS);
    tags
}

/// Stringifies, trims and lowercases every tag and drops blank ones. No cap.
pub fn clean_tags(values: &[Value]) -> Vec<String> {
    values
        .iter()
        .map(|value| match value {
            Value::String(s) => s.trim().to_lowercase(),
            other => other.to_string().trim().to_lowercase(),
        })
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Tidies a payload before it is sent to the server.
///
/// Text fields are trimmed and tag lists cleaned, but nothing is dropped or
/// capped, so the validator still sees an over-long tag list or a missing
/// field. A malformed tag value is passed through untouched.
pub fn prepare_submission(input: &BookmarkInput) -> BookmarkInput {
    let tags = match &input.tags {
        Some(TagsInput::List(values)) => Some(TagsInput::List(
            clean_tags(values).into_iter().map(Value::String).collect(),
        )),
        other => other.clone(),
    };

    BookmarkInput {
        url: input.url.as_deref().map(|s| s.trim().to_string()),
        title: input.title.as_deref().map(|s| s.trim().to_string()),
        description: input.description.as_deref().map(|s| s.trim().to_string()),
        tags,
    }
}

fn trimmed(value: Option<&str>) -> String {
    value.map(|s| s.trim().to_string()).unwrap_or_default()
}
