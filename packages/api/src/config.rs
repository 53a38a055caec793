//! Backend connection settings.
//!
//! Native builds read `SUPABASE_URL` / `SUPABASE_ANON_KEY` at runtime (after loading a
//! `.env` file if one exists). WASM builds have no process environment, so the same two
//! names are captured when the crate is compiled.

use url::Url;

use crate::error::ConfigError;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const ANON_KEY_VAR: &str = "SUPABASE_ANON_KEY";

/// Where the hosted backend lives and the public key used to address it.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    url: String,
    anon_key: String,
}

impl BackendConfig {
    /// Validate and build a config. Trailing slashes on `url` are dropped.
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let anon_key = anon_key.into();

        let parsed = Url::parse(url.trim()).map_err(|e| ConfigError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                reason: format!("unsupported scheme {}", parsed.scheme()),
                url,
            });
        }
        if anon_key.trim().is_empty() {
            return Err(ConfigError::EmptyKey);
        }

        Ok(Self {
            url: url.trim().trim_end_matches('/').to_string(),
            anon_key: anon_key.trim().to_string(),
        })
    }

    /// Read settings from the process environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let url = std::env::var(URL_VAR).map_err(|_| ConfigError::Missing(URL_VAR))?;
        let anon_key = std::env::var(ANON_KEY_VAR).map_err(|_| ConfigError::Missing(ANON_KEY_VAR))?;
        Self::new(url, anon_key)
    }

    /// Settings baked in at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let url = option_env!("SUPABASE_URL").ok_or(ConfigError::Missing(URL_VAR))?;
        let anon_key = option_env!("SUPABASE_ANON_KEY").ok_or(ConfigError::Missing(ANON_KEY_VAR))?;
        Self::new(url, anon_key)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// Absolute URL for a path on the backend, e.g. `"/auth/v1/logout"`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = BackendConfig::new("https://abc.supabase.co/", "anon").unwrap();
        assert_eq!(config.url(), "https://abc.supabase.co");
        assert_eq!(
            config.endpoint("/auth/v1/token"),
            "https://abc.supabase.co/auth/v1/token"
        );
    }

    #[test]
    fn test_new_rejects_blank_key() {
        let err = BackendConfig::new("https://abc.supabase.co", "  ").unwrap_err();
        assert_eq!(err, ConfigError::EmptyKey);
    }

    #[test]
    fn test_new_rejects_bad_urls() {
        assert!(matches!(
            BackendConfig::new("not a url", "anon"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            BackendConfig::new("ftp://abc.supabase.co", "anon"),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_missing_var_message() {
        assert_eq!(
            ConfigError::Missing(URL_VAR).to_string(),
            "SUPABASE_URL not set"
        );
    }
}
