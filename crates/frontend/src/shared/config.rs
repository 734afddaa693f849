//! Build-time configuration.
//!
//! The console is a static bundle, so settings are baked in at compile time
//! from `ADMIN_*` environment variables. Anything not set falls back to the
//! defaults below; the API host falls back to the page's own host on port
//! 3000 (see [`crate::shared::api_utils::api_base`]).

use once_cell::sync::Lazy;

pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "admin_access_token";
pub const DEFAULT_ADMIN_STORAGE_KEY: &str = "admin_info";
pub const DEFAULT_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: Option<String>,
    pub token_storage_key: String,
    pub admin_storage_key: String,
    pub default_page_size: u32,
}

impl AppConfig {
    fn from_env() -> Self {
        Self::from_values(
            option_env!("ADMIN_API_BASE_URL"),
            option_env!("ADMIN_TOKEN_STORAGE_KEY"),
            option_env!("ADMIN_DEFAULT_PAGE_SIZE"),
        )
    }

    pub fn from_values(
        api_base_url: Option<&str>,
        token_storage_key: Option<&str>,
        default_page_size: Option<&str>,
    ) -> Self {
        let non_empty = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Self {
            api_base_url: non_empty(api_base_url).map(|s| s.trim_end_matches('/').to_string()),
            token_storage_key: non_empty(token_storage_key)
                .unwrap_or_else(|| DEFAULT_TOKEN_STORAGE_KEY.to_string()),
            admin_storage_key: DEFAULT_ADMIN_STORAGE_KEY.to_string(),
            default_page_size: default_page_size
                .and_then(|s| s.trim().parse::<u32>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let c = AppConfig::from_values(None, None, None);
        assert_eq!(c.api_base_url, None);
        assert_eq!(c.token_storage_key, DEFAULT_TOKEN_STORAGE_KEY);
        assert_eq!(c.default_page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn trims_trailing_slash_and_parses_page_size() {
        let c = AppConfig::from_values(Some("https://api.example.com/"), Some("tok"), Some("25"));
        assert_eq!(c.api_base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(c.token_storage_key, "tok");
        assert_eq!(c.default_page_size, 25);
    }

    #[test]
    fn invalid_page_size_falls_back() {
        assert_eq!(AppConfig::from_values(None, None, Some("0")).default_page_size, 50);
        assert_eq!(AppConfig::from_values(None, None, Some("x")).default_page_size, 50);
    }
}
