//! Client configuration

/// Base URL used when `VENUE_API_BASE_URL` is not set at build time
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the REST backend lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Server base URL without trailing slash (e.g., "http://localhost:8000")
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        Self {
            base_url: if trimmed.is_empty() {
                DEFAULT_BASE_URL.to_string()
            } else {
                trimmed.to_string()
            },
        }
    }

    /// Configuration baked in at compile time
    pub fn from_env() -> Self {
        Self::new(option_env!("VENUE_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a relative path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
