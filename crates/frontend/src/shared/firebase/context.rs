use contracts::system::site_config::{CollectionPath, SiteConfig};
use wasm_bindgen::JsValue;

use super::bindings;
use crate::shared::data::StoreError;

/// Initialised SDK handle plus the addressing the site needs.
///
/// Built once from [`SiteConfig`] at start-up and handed to the data-access
/// layer explicitly.
#[derive(Clone)]
pub struct FirebaseContext {
    handle: JsValue,
    pub portfolio: CollectionPath,
    pub initial_auth_token: Option<String>,
}

impl FirebaseContext {
    pub fn initialize(config: &SiteConfig) -> Result<Self, StoreError> {
        if config.firebase.project_id.trim().is_empty() {
            return Err(StoreError::Bridge("firebase project is not configured".into()));
        }
        let options =
            bindings::to_js(&config.firebase).map_err(|e| StoreError::Bridge(e.to_string()))?;
        let handle = bindings::init_firebase(&options)
            .map_err(|e| StoreError::Bridge(bindings::js_error_message(&e)))?;

        log::info!(
            "Firebase initialised for project {} ({})",
            config.firebase.project_id,
            config.portfolio_collection()
        );

        Ok(Self {
            handle,
            portfolio: config.portfolio_collection(),
            initial_auth_token: config.initial_auth_token.clone(),
        })
    }

    pub(crate) fn handle(&self) -> &JsValue {
        &self.handle
    }
}
