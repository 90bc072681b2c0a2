use contracts::domain::a002_booking::message::DEFAULT_BOOKING_PHONE;
use contracts::system::site_config::{
    FirebaseOptions, SiteConfig, DEFAULT_APP_ID, DEFAULT_COLLECTION,
};
use gloo_net::http::Request;
use leptos::prelude::*;

use crate::shared::api_utils::api_url;

/// Public runtime configuration served by the backend
pub async fn fetch_site_config() -> Result<SiteConfig, String> {
    let response = Request::get(&api_url("/api/site/config"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Site config request failed: {}", response.status()));
    }

    response
        .json::<SiteConfig>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Used when the backend cannot be reached: the site still renders, the
/// portfolio runs against an offline store.
pub fn fallback_site_config() -> SiteConfig {
    SiteConfig {
        firebase: FirebaseOptions::default(),
        app_id: DEFAULT_APP_ID.to_string(),
        collection: DEFAULT_COLLECTION.to_string(),
        whatsapp_phone: DEFAULT_BOOKING_PHONE.to_string(),
        initial_auth_token: None,
    }
}

/// Values from the site config that views read after start-up
#[derive(Clone, Copy)]
pub struct SiteSettings {
    pub whatsapp_phone: StoredValue<String>,
}

impl SiteSettings {
    pub fn new(whatsapp_phone: impl Into<String>) -> Self {
        let phone = whatsapp_phone.into();
        let phone = if phone.trim().is_empty() {
            DEFAULT_BOOKING_PHONE.to_string()
        } else {
            phone
        };
        Self {
            whatsapp_phone: StoredValue::new(phone),
        }
    }
}

pub fn use_site_settings() -> SiteSettings {
    use_context::<SiteSettings>().unwrap_or_else(|| SiteSettings::new(DEFAULT_BOOKING_PHONE))
}
