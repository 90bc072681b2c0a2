use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::common::DocTimestamp;
use crate::shared::date_format::format_short_date_id;

/// Field names as stored in the remote document
pub const FIELD_CREATED_AT: &str = "createdAt";
pub const FIELD_AUTHOR_ID: &str = "authorId";
pub const FIELD_VIEWS: &str = "views";

pub const DEFAULT_VIEWS: &str = "0";

/// Placeholder some older documents carry instead of a missing video link
const NO_VIDEO_PLACEHOLDER: &str = "#";

// ============================================================================
// Aggregate
// ============================================================================

/// Элемент портфолио (как он лежит в документной БД).
///
/// Every field tolerates absence, `null` and a wrong scalar type, so a
/// malformed document still renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub thumbnail: String,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub video_url: Option<String>,
    /// Older documents store the counter as a number
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub views: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DocTimestamp>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub author_id: String,
}

/// Scalar as text; `null`, objects and arrays have none
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DocTimestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value::<DocTimestamp>(value).ok())
}

impl PortfolioItem {
    /// Build from a snapshot document: the id lives outside the field map.
    pub fn from_document(id: &str, fields: Value) -> Result<Self, serde_json::Error> {
        let mut item: PortfolioItem = serde_json::from_value(fields)?;
        item.id = id.to_string();
        Ok(item)
    }

    pub fn created_at_seconds(&self) -> i64 {
        DocTimestamp::sort_key(self.created_at.as_ref())
    }

    pub fn has_playable_video(&self) -> bool {
        self.video_url
            .as_deref()
            .map(str::trim)
            .is_some_and(|url| !url.is_empty() && url != NO_VIDEO_PLACEHOLDER)
    }

    pub fn views_label(&self) -> Option<&str> {
        self.views.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// "15 Nov 2023" or `None` while the server timestamp is pending
    pub fn created_at_label(&self) -> Option<String> {
        self.created_at
            .as_ref()
            .and_then(|ts| format_short_date_id(ts.seconds))
    }
}

// ============================================================================
// Create payload
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortfolioValidationError {
    #[error("Judul wajib diisi")]
    MissingTitle,
    #[error("Kategori wajib dipilih")]
    MissingCategory,
    #[error("URL thumbnail wajib diisi")]
    MissingThumbnail,
}

/// Данные формы добавления элемента портфолио (админ-панель)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolioItem {
    pub title: String,
    pub category: String,
    pub thumbnail: String,
    pub video_url: Option<String>,
    pub views: Option<String>,
}

impl NewPortfolioItem {
    pub fn validate(&self) -> Result<(), PortfolioValidationError> {
        if self.title.trim().is_empty() {
            return Err(PortfolioValidationError::MissingTitle);
        }
        if self.category.trim().is_empty() {
            return Err(PortfolioValidationError::MissingCategory);
        }
        if self.thumbnail.trim().is_empty() {
            return Err(PortfolioValidationError::MissingThumbnail);
        }
        Ok(())
    }

    /// Field map for the store. The creation time is NOT included: the caller asks
    /// the store to fill [`FIELD_CREATED_AT`] with its server timestamp.
    pub fn into_document(self, author_id: &str) -> Map<String, Value> {
        let views = self
            .views
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_VIEWS.to_string());
        let video_url = self
            .video_url
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let mut doc = Map::new();
        doc.insert("title".into(), Value::String(self.title.trim().to_string()));
        doc.insert("category".into(), Value::String(self.category));
        doc.insert(
            "thumbnail".into(),
            Value::String(self.thumbnail.trim().to_string()),
        );
        if let Some(url) = video_url {
            doc.insert("videoUrl".into(), Value::String(url));
        }
        doc.insert(FIELD_VIEWS.into(), Value::String(views));
        doc.insert(FIELD_AUTHOR_ID.into(), Value::String(author_id.to_string()));
        doc
    }
}
