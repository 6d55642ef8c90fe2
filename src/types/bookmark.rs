use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Represents a saved bookmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(with = "timestamp_millis")]
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Returns true if any tag matches `tag`, ignoring case.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}

/// Untrusted tag list as submitted by a caller.
///
/// An array becomes `List`; any other JSON value is kept as `Malformed` so the
/// validator can report it instead of the request failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<Value>),
    Malformed(Value),
}

/// Candidate bookmark payload for create and update.
///
/// Every field is optional; `None` means the field was missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookmarkInput {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagsInput>,
}

impl BookmarkInput {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let list = tags.into_iter().map(|t| Value::String(t.into())).collect();
        self.tags = Some(TagsInput::List(list));
        self
    }
}

/// Accepts any JSON scalar for a text field.
///
/// Falsy values (`null`, `false`, `0`, `""`) become `None`; other scalars are
/// stringified.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => None,
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// The bookmark fields a caller can submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkField {
    Url,
    Title,
    Description,
    Tags,
}

impl BookmarkField {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookmarkField::Url => "url",
            BookmarkField::Title => "title",
            BookmarkField::Description => "description",
            BookmarkField::Tags => "tags",
        }
    }
}

/// What went wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    Required,
    InvalidUrl,
    TooLong { max: usize },
    NotAList,
    TooMany { max: usize },
    NotLowercase,
}

/// One field-level validation failure. Serializes as `{field, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: BookmarkField,
    #[serde(skip)]
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: BookmarkField, kind: ValidationErrorKind) -> Self {
        let message = match (field, kind) {
            (BookmarkField::Url, ValidationErrorKind::Required) => "URL is required".to_string(),
            (BookmarkField::Url, _) => "URL must be valid".to_string(),
            (BookmarkField::Title, ValidationErrorKind::Required) => "Title is required".to_string(),
            (BookmarkField::Title, ValidationErrorKind::TooLong { max })
            | (BookmarkField::Description, ValidationErrorKind::TooLong { max }) => {
                let name = if field == BookmarkField::Title { "Title" } else { "Description" };
                format!("{} must be {} characters or fewer", name, max)
            }
            (BookmarkField::Tags, ValidationErrorKind::NotLowercase) => {
                "Tags must be lowercase strings".to_string()
            }
            (BookmarkField::Tags, ValidationErrorKind::TooMany { max }) => {
                format!("Tags must be an array with up to {} items", max)
            }
            (BookmarkField::Tags, ValidationErrorKind::NotAList) => {
                "Tags must be an array with up to 5 items".to_string()
            }
            (field, _) => format!("{} is invalid", field.as_str()),
        };
        Self { field, kind, message }
    }
}

/// Body returned for every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}

/// Wire form of a `FieldError`, as a client sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub field: String,
    pub message: String,
}

impl From<&FieldError> for ErrorDetail {
    fn from(err: &FieldError) -> Self {
        Self {
            field: err.field.as_str().to_string(),
            message: err.message.clone(),
        }
    }
}

/// Body of a successful delete: a message plus the removed record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub bookmark: Bookmark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// `createdAt` is written as RFC 3339 UTC with milliseconds, e.g. `2026-02-01T10:00:00.000Z`.
pub mod timestamp_millis {
    use super::*;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
