use contracts::system::auth::{AdminLoginRequest, AdminLoginResponse, AdminSession};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Outcome of a rejected login call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFailure {
    /// 401: wrong password
    Rejected,
    Other(String),
}

/// Login with the admin password
pub async fn login(password: String) -> Result<AdminLoginResponse, LoginFailure> {
    let request = AdminLoginRequest { password };

    let response = Request::post(&api_url("/api/system/auth/login"))
        .json(&request)
        .map_err(|e| LoginFailure::Other(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| LoginFailure::Other(format!("Failed to send request: {}", e)))?;

    match response.status() {
        200..=299 => response
            .json::<AdminLoginResponse>()
            .await
            .map_err(|e| LoginFailure::Other(format!("Failed to parse response: {}", e))),
        401 | 400 => Err(LoginFailure::Rejected),
        status => Err(LoginFailure::Other(format!("Login failed: {}", status))),
    }
}

/// Get current admin session (validates the token)
pub async fn get_current_admin(access_token: &str) -> Result<AdminSession, String> {
    let response = Request::get(&api_url("/api/system/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current admin failed: {}", response.status()));
    }

    response
        .json::<AdminSession>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
