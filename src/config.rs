//! Application Configuration
//!
//! Build-time settings baked in with `option_env!`. A WASM bundle has no
//! filesystem or process environment, so overrides are read at compile time.

/// Default REST endpoint root
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Maximum number of categories a user may hold
pub const DEFAULT_CATEGORY_LIMIT: usize = 10;

/// How long the "saved" banner stays up after a link is created
pub const DEFAULT_BANNER_MS: u32 = 4000;

#[derive(Clone, PartialEq)]
pub struct AppConfig {
    /// REST endpoint root, without trailing slash
    pub api_base_url: String,
    /// Client-side cap on the category list
    pub category_limit: usize,
    /// Success banner lifetime in milliseconds
    pub banner_ms: u32,
    /// Token used to seed the store in development builds
    pub dev_access_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            category_limit: DEFAULT_CATEGORY_LIMIT,
            banner_ms: DEFAULT_BANNER_MS,
            dev_access_token: None,
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base_url", &self.api_base_url)
            .field("category_limit", &self.category_limit)
            .field("banner_ms", &self.banner_ms)
            .field("dev_access_token", &self.dev_access_token.as_ref().map(|_| "***"))
            .finish()
    }
}

impl AppConfig {
    /// Build the config from compile-time environment overrides
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("MEDIA_API_BASE_URL"),
            option_env!("MEDIA_CATEGORY_LIMIT"),
            option_env!("MEDIA_BANNER_MS"),
            option_env!("MEDIA_DEV_ACCESS_TOKEN"),
        )
    }

    fn from_values(
        base_url: Option<&str>,
        category_limit: Option<&str>,
        banner_ms: Option<&str>,
        dev_token: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            category_limit: category_limit
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.category_limit),
            banner_ms: banner_ms
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.banner_ms),
            dev_access_token: dev_token
                .map(str::to_string)
                .filter(|token| !token.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None, None, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.category_limit, 10);
        assert_eq!(config.banner_ms, 4000);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = AppConfig::from_values(
            Some("https://media.example.com/api/"),
            Some("3"),
            Some("1500"),
            Some("abc"),
        );
        assert_eq!(config.api_base_url, "https://media.example.com/api");
        assert_eq!(config.category_limit, 3);
        assert_eq!(config.banner_ms, 1500);
        assert_eq!(config.dev_access_token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_garbage_falls_back_to_defaults() {
        let config = AppConfig::from_values(Some(""), Some("ten"), Some("-1"), Some(""));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.category_limit, DEFAULT_CATEGORY_LIMIT);
        assert_eq!(config.banner_ms, DEFAULT_BANNER_MS);
        assert!(config.dev_access_token.is_none());
    }

    #[test]
    fn test_debug_masks_token() {
        let config = AppConfig::from_values(None, None, None, Some("secret-token"));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("***"));
    }
}
