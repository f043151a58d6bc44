//! Frontend configuration.
//!
//! URLs are resolved at build time through `option_env!` so deployments
//! can point the bundle at another environment without code changes.

/// Frontend configuration for API and third-party endpoints.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    api_base_url: String,
    nominatim_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TIPDESK_API_URL").unwrap_or("/api").to_string(),
            nominatim_url: option_env!("TIPDESK_NOMINATIM_URL")
                .unwrap_or("https://nominatim.openstreetmap.org/reverse")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    #[must_use]
    pub fn nominatim_url(&self) -> &str {
        &self.nominatim_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_base_url() {
        let config = FrontendConfig::new();
        assert!(!config.api_base_url().is_empty());
    }

    #[test]
    fn test_nominatim_url_is_absolute() {
        let config = FrontendConfig::default();
        assert!(config.nominatim_url().starts_with("http"));
    }

    #[test]
    fn test_config_clone() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.api_base_url(), config2.api_base_url());
    }
}
