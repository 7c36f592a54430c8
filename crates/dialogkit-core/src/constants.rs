//! Framework-wide constants

use std::time::Duration;

pub const DEFAULT_SERVER_PORT: u16 = 5005;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5005";

pub const MINIMUM_COMPATIBLE_VERSION: &str = "0.12.0a6";

pub const DOCS_BASE_URL: &str = "https://rasa.com/docs/core";

pub const DEFAULT_NLU_FALLBACK_THRESHOLD: f64 = 0.0;

pub const DEFAULT_CORE_FALLBACK_THRESHOLD: f64 = 0.0;

pub const DEFAULT_FALLBACK_ACTION: &str = "action_default_fallback";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60 * 5);

pub const FALLBACK_SCORE: f64 = 1.1;

pub const FORM_SCORE: f64 = 1.2;

pub const REQUESTED_SLOT: &str = "requested_slot";

// Special user messages
pub const INTENT_MESSAGE_PREFIX: &str = "/";

pub const USER_INTENT_RESTART: &str = "/restart";

/// Server URL for a given port
pub fn server_url(port: u16) -> String {
    format!("http://localhost:{}", port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants_agree() {
        assert_eq!(server_url(DEFAULT_SERVER_PORT), DEFAULT_SERVER_URL);
        assert!(USER_INTENT_RESTART.starts_with(INTENT_MESSAGE_PREFIX));
        assert_eq!(DEFAULT_REQUEST_TIMEOUT.as_secs(), 300);
    }
}
