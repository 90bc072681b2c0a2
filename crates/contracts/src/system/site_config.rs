//! Public runtime configuration handed to the browser at start-up.

use serde::{Deserialize, Serialize};

pub const DEFAULT_APP_ID: &str = "default-app-id";
pub const DEFAULT_COLLECTION: &str = "portfolio_arus_digital_v2";

/// Options for the hosted document store / identity provider SDK.
///
/// Serialized in camelCase so the object can be passed to the SDK as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseOptions {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    #[serde(default)]
    pub storage_bucket: String,
    #[serde(default)]
    pub messaging_sender_id: String,
    pub app_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub firebase: FirebaseOptions,
    pub app_id: String,
    pub collection: String,
    pub whatsapp_phone: String,
    /// Custom sign-in token; anonymous sign-in is used when absent
    #[serde(default)]
    pub initial_auth_token: Option<String>,
}

impl SiteConfig {
    pub fn portfolio_collection(&self) -> CollectionPath {
        CollectionPath::portfolio(&self.app_id, &self.collection)
    }
}

/// Path of a collection inside the document store, as segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionPath {
    segments: Vec<String>,
}

impl CollectionPath {
    /// `artifacts/<app_id>/public/data/<collection>`
    pub fn portfolio(app_id: &str, collection: &str) -> Self {
        let app_id = if app_id.trim().is_empty() {
            DEFAULT_APP_ID
        } else {
            app_id
        };
        Self {
            segments: vec![
                "artifacts".to_string(),
                app_id.to_string(),
                "public".to_string(),
                "data".to_string(),
                collection.to_string(),
            ],
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segments addressing one document of this collection
    pub fn document(&self, id: &str) -> Vec<String> {
        let mut segments = self.segments.clone();
        segments.push(id.to_string());
        segments
    }
}

impl std::fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_path() {
        let path = CollectionPath::portfolio("arus", DEFAULT_COLLECTION);
        assert_eq!(
            path.to_string(),
            "artifacts/arus/public/data/portfolio_arus_digital_v2"
        );
        assert_eq!(path.document("abc").last().map(String::as_str), Some("abc"));
        assert_eq!(path.document("abc").len(), 6);
    }

    #[test]
    fn test_blank_app_id_uses_default() {
        let path = CollectionPath::portfolio(" ", "c");
        assert_eq!(path.segments()[1], DEFAULT_APP_ID);
    }

    #[test]
    fn test_firebase_options_are_camel_case() {
        let json = serde_json::to_value(FirebaseOptions {
            api_key: "k".into(),
            auth_domain: "d".into(),
            project_id: "p".into(),
            storage_bucket: String::new(),
            messaging_sender_id: String::new(),
            app_id: "a".into(),
        })
        .unwrap();
        assert_eq!(json["apiKey"], "k");
        assert_eq!(json["messagingSenderId"], "");
    }
}
