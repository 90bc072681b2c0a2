use web_sys::window;

// sessionStorage: admin mode ends with the browser tab
const ACCESS_TOKEN_KEY: &str = "arus_admin_token";

fn get_session_storage() -> Option<web_sys::Storage> {
    window()?.session_storage().ok()?
}

/// Save access token to sessionStorage
pub fn save_access_token(token: &str) {
    if let Some(storage) = get_session_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
    }
}

/// Get access token from sessionStorage
pub fn get_access_token() -> Option<String> {
    get_session_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

pub fn clear_tokens() {
    if let Some(storage) = get_session_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
    }
}
