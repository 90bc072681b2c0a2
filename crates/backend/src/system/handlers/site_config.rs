use axum::extract::{Json, State};
use contracts::system::site_config::SiteConfig;

use crate::system::state::AppState;

/// Public runtime configuration for the SPA
pub async fn get_site_config(State(state): State<AppState>) -> Json<SiteConfig> {
    Json(state.config.site_config())
}
