//! Backend endpoint configuration
//!
//! Injected into the HTTP client at construction instead of being read
//! from ambient state, so tests can point a session at a mock endpoint.

use serde::{Deserialize, Serialize};

/// Default when no override is provided at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Base URL of the prediction/suggestions backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    pub fn suggestions_url(&self) -> String {
        format!("{}/suggestions", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_endpoint_urls() {
        let config = BackendConfig::new("http://api.example.com");
        assert_eq!(config.predict_url(), "http://api.example.com/predict");
        assert_eq!(config.suggestions_url(), "http://api.example.com/suggestions");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = BackendConfig::new("http://localhost:5000/");
        assert_eq!(config.predict_url(), "http://localhost:5000/predict");
    }
}
