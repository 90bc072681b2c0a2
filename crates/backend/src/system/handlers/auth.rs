use axum::extract::{Json, State};
use contracts::system::auth::{AdminLoginRequest, AdminLoginResponse, AdminSession};

use crate::shared::error::ApiError;
use crate::system::auth::{extractor::CurrentAdmin, gate::session_from_claims};
use crate::system::state::AppState;

/// Login handler
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, ApiError> {
    let response = state.admin.login(&request)?;
    Ok(Json(response))
}

/// Current admin session (token validated by `require_admin`)
pub async fn current_admin(CurrentAdmin(claims): CurrentAdmin) -> Json<AdminSession> {
    Json(session_from_claims(&claims))
}
