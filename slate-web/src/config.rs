//! Frontend configuration module
//!
//! Build-time configuration for the API endpoint and the dev display port.

const DEFAULT_API_BASE_URL: &str = "/api";
const DEFAULT_DEV_PORT: u16 = 3000;

/// Frontend configuration for URLs and settings.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the remote REST API.
    pub api_base_url: String,

    /// Port the dev server binds for local display.
    pub dev_port: u16,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("SLATE_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            dev_port: option_env!("SLATE_WEB_PORT")
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_DEV_PORT),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_base_url() {
        let config = FrontendConfig::default();
        assert!(!config.api_base_url.is_empty());
        assert!(!config.api_base_url.ends_with('/') || config.api_base_url == "/");
    }

    #[test]
    fn config_default_port() {
        let config = FrontendConfig::new();
        assert!(config.dev_port > 0);
    }

    #[test]
    fn config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.api_base_url(), config2.api_base_url());
    }
}
