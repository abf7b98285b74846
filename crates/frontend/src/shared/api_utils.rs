//! API utilities for frontend-backend communication
//!
//! The backend serves the built frontend itself, so API calls go to the
//! page's own origin.

/// Get the base URL for API requests
///
/// # Returns
/// - Origin of the current page, like "http://localhost:7860"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/d400/financial_overview");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
