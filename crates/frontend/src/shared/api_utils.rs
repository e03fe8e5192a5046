//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port the backend listens on (see `[server] port` in config.toml)
pub const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available (requests become relative)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_url(&protocol, &hostname)
}

fn base_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```no_run
/// use frontend::shared::api_utils::api_url;
///
/// let url = api_url("/api/d405/app_level_retn_rem");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_uses_backend_port() {
        assert_eq!(base_url("https:", "example.com"), "https://example.com:3000");
        assert_eq!(base_url("http:", "127.0.0.1"), "http://127.0.0.1:3000");
    }
}
