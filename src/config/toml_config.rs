use crate::config::ApiSettings;
use crate::domain::model::OutputFormat;
use crate::utils::error::{Result, ScoresError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub token: Option<String>,
    pub base_url: Option<String>,
    pub live_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
    pub window_days: Option<u32>,
}

impl FileConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScoresError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Like `from_file`, but a missing file is not an error.
    pub fn load_optional<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        if !path.as_ref().exists() {
            tracing::debug!("No config file at {}", path.as_ref().display());
            return Ok(None);
        }
        Self::from_file(path).map(Some)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScoresError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SOCCER_CLI_API_TOKEN})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScoresError::ConfigError {
            message: format!("env placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The token, unless it is still an unresolved `${...}` placeholder.
    pub fn token(&self) -> Option<&str> {
        self.api
            .token
            .as_deref()
            .filter(|token| !token.trim().is_empty() && !token.starts_with("${"))
    }

    pub fn apply_to(&self, settings: &mut ApiSettings) {
        if let Some(token) = self.token() {
            settings.api_token = token.to_string();
        }
        if let Some(base_url) = &self.api.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(live_url) = &self.api.live_url {
            settings.live_url = live_url.clone();
        }
        if let Some(timeout) = self.api.timeout_seconds {
            settings.timeout_seconds = timeout;
        }
    }
}
