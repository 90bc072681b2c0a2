use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;

use super::bindings::{self, js_error_message};
use super::context::FirebaseContext;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("sign-in rejected: {0}")]
    SignIn(String),
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),
}

/// Signed-in user as reported by the identity provider.
/// Only its presence and `uid` matter to the site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub uid: String,
    #[serde(default)]
    pub is_anonymous: bool,
}

fn session_from_js(value: JsValue) -> Option<SessionUser> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Cannot read session user: {}", e);
            None
        }
    }
}

#[derive(Clone)]
pub struct FirebaseIdentity {
    ctx: FirebaseContext,
}

impl FirebaseIdentity {
    pub fn new(ctx: FirebaseContext) -> Self {
        Self { ctx }
    }

    /// Custom-token sign-in when a token is configured, anonymous otherwise
    pub async fn sign_in(&self) -> Result<Option<SessionUser>, AuthError> {
        let result = match self.ctx.initial_auth_token.as_deref() {
            Some(token) => bindings::sign_in_with_custom_token(self.ctx.handle(), token).await,
            None => bindings::sign_in_anonymously(self.ctx.handle()).await,
        };
        result
            .map(session_from_js)
            .map_err(|e| AuthError::SignIn(js_error_message(&e)))
    }

    /// Listen for session changes until the returned watch is dropped
    pub fn watch<F>(&self, mut on_change: F) -> Result<SessionWatch, AuthError>
    where
        F: FnMut(Option<SessionUser>) + 'static,
    {
        let callback = Closure::<dyn FnMut(JsValue)>::new(move |user: JsValue| {
            on_change(session_from_js(user));
        });
        let unsubscribe = bindings::on_auth_state_changed(self.ctx.handle(), &callback)
            .map_err(|e| AuthError::Unavailable(js_error_message(&e)))?;
        Ok(SessionWatch {
            unsubscribe: Some(unsubscribe),
            _callback: callback,
        })
    }
}

/// Active session-change listener; detached on drop
pub struct SessionWatch {
    unsubscribe: Option<js_sys::Function>,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl Drop for SessionWatch {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            let _ = unsubscribe.call0(&JsValue::NULL);
        }
    }
}
