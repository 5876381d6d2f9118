#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};

pub use toml_config::FileConfig;

pub const DEFAULT_BASE_URL: &str = "http://api.football-data.org/alpha/";
pub const DEFAULT_LIVE_URL: &str = "http://soccer-cli.appspot.com/";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Everything the HTTP client needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub api_token: String,
    pub base_url: String,
    pub live_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            live_url: DEFAULT_LIVE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ApiSettings {
    /// Merges the token given on the command line (or its env var) with the
    /// config file. The command line wins.
    pub fn resolve(token: Option<String>, file: Option<&FileConfig>) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(file) = file {
            file.apply_to(&mut settings);
        }

        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            settings.api_token = token;
        }

        if !settings.base_url.ends_with('/') {
            settings.base_url.push('/');
        }

        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for ApiSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api.token", &self.api_token)?;
        validate_url("api.base_url", &self.base_url)?;
        validate_url("api.live_url", &self.live_url)?;
        validate_range("api.timeout_seconds", self.timeout_seconds, 1, 300)
    }
}
