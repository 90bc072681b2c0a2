//! API utilities for frontend-backend communication

/// Port the axum host listens on
const BACKEND_PORT: &str = "3000";

/// Get the base URL for API requests
///
/// When the page is served by the backend itself the API is same-origin and
/// an empty base is returned. Otherwise (e.g. `trunk serve` on another port)
/// the backend is assumed on port 3000 of the same host.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let port = location.port().unwrap_or_default();
    if port == BACKEND_PORT {
        return String::new();
    }
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/site/config");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Open a URL in a new browsing context
///
/// A blocked popup comes back as `Ok(None)` and is reported as an error.
pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("window is not available")?;
    require_opened(window.open_with_url_and_target(url, "_blank"))
}

/// `window.open` succeeded only if it handed back a window
pub fn require_opened<W, E: std::fmt::Debug>(result: Result<Option<W>, E>) -> Result<(), String> {
    match result {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err("popup blocked by the browser".to_string()),
        Err(e) => Err(format!("{:?}", e)),
    }
}

/// Native confirm dialog; `false` when it cannot be shown
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocked_popup_is_an_error() {
        let blocked: Result<Option<()>, ()> = Ok(None);
        assert!(require_opened(blocked).is_err());
    }

    #[test]
    fn test_opened_window_is_ok() {
        let opened: Result<Option<u8>, ()> = Ok(Some(1));
        assert!(require_opened(opened).is_ok());
        let failed: Result<Option<u8>, &str> = Err("SecurityError");
        assert_eq!(require_opened(failed).unwrap_err(), "\"SecurityError\"");
    }
}
