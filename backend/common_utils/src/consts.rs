//! Consolidated constants for the gateway abstraction

/// Redirect method assumed when a response type does not declare one.
pub const DEFAULT_REDIRECT_METHOD: &str = "GET";

/// Title of the generated auto-submitting redirect page.
pub const REDIRECT_PAGE_TITLE: &str = "Redirecting...";

/// `Content-Type` value sent alongside generated redirect pages.
pub const HTML_CONTENT_TYPE: &str = "text/html";
