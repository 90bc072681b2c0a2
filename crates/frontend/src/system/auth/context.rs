use contracts::system::auth::{AdminLoginRequest, AdminSession};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

pub const LOGIN_SUCCESS: &str = "Login Berhasil! Selamat datang Admin.";
pub const LOGIN_REJECTED: &str = "Password Salah!";
pub const LOGOUT_SUCCESS: &str = "Logout berhasil";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub session: Option<AdminSession>,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        self.access_token.is_some() && self.session.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdminLoginError {
    /// Nothing typed: rejected locally, no request sent
    EmptyPassword,
    WrongPassword,
    Unavailable(String),
}

impl AdminLoginError {
    pub fn toast_message(&self) -> &'static str {
        match self {
            AdminLoginError::EmptyPassword | AdminLoginError::WrongPassword => LOGIN_REJECTED,
            AdminLoginError::Unavailable(_) => "Server admin tidak dapat dihubungi",
        }
    }
}

/// Blank input never reaches the server
pub fn check_password_input(password: &str) -> Result<(), AdminLoginError> {
    let request = AdminLoginRequest {
        password: password.to_string(),
    };
    if request.is_blank() {
        Err(AdminLoginError::EmptyPassword)
    } else {
        Ok(())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore admin mode from sessionStorage on mount
    spawn_local(async move {
        if let Some(access_token) = storage::get_access_token() {
            match api::get_current_admin(&access_token).await {
                Ok(session) => {
                    log::info!("Admin session restored, valid until {}", session.expires_at);
                    set_auth_state.set(AuthState {
                        access_token: Some(access_token),
                        session: Some(session),
                    });
                }
                Err(e) => {
                    log::warn!("Stored admin token rejected: {}", e);
                    storage::clear_tokens();
                }
            }
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Reactive admin flag
pub fn use_is_admin() -> Signal<bool> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(AuthState::is_admin))
}

/// Helper: Perform login. State changes only on success.
pub async fn do_login(
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), AdminLoginError> {
    check_password_input(&password)?;

    let response = api::login(password).await.map_err(|e| match e {
        api::LoginFailure::Rejected => AdminLoginError::WrongPassword,
        api::LoginFailure::Other(msg) => AdminLoginError::Unavailable(msg),
    })?;

    storage::save_access_token(&response.access_token);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        session: Some(AdminSession {
            subject: "admin".to_string(),
            expires_at: response.expires_at,
        }),
    });

    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
