//! Backend endpoint configuration loading

use crate::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Backend connection configuration
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL of the gym-management REST backend, without trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Base URL resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable
/// 3. TOML config file (`base_url` key)
/// 4. Compiled default (fallback)
pub fn resolve_base_url(cli_arg: Option<&str>, env_var_name: &str) -> Result<String> {
    // Priority 1: Command-line argument
    if let Some(url) = cli_arg {
        return Ok(normalize_base_url(url));
    }

    // Priority 2: Environment variable
    if let Ok(url) = std::env::var(env_var_name) {
        if !url.trim().is_empty() {
            return Ok(normalize_base_url(&url));
        }
    }

    // Priority 3: TOML config file
    if let Ok(config_path) = locate_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(url) = config.get("base_url").and_then(|v| v.as_str()) {
                    return Ok(normalize_base_url(url));
                }
            }
        }
    }

    // Priority 4: Compiled default
    Ok(DEFAULT_BASE_URL.to_string())
}

/// Strip a trailing slash so path joins stay predictable
fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Get default configuration file path for the platform
fn locate_config_file() -> Result<PathBuf> {
    let user_config = dirs::config_dir()
        .map(|d| d.join("gymdesk").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

    if user_config.exists() {
        return Ok(user_config);
    }

    let system_config = PathBuf::from("/etc/gymdesk/config.toml");
    if system_config.exists() {
        return Ok(system_config);
    }

    Err(Error::Config("No config file found".to_string()))
}

impl BackendConfig {
    /// Resolve configuration from CLI argument plus `GYMDESK_API_URL`
    pub fn resolve(cli_arg: Option<&str>) -> Result<Self> {
        let base_url = resolve_base_url(cli_arg, "GYMDESK_API_URL")?;
        Ok(Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }
}
