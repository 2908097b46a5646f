use super::Result;
use crate::core::query_state::DEFAULT_ITEMS_PER_PAGE;
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const URL_ENV: &str = "ERP_ADMIN_URL";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub items_per_page: Option<u32>,
    pub company_id: Option<String>,
}

impl Config {
    /// Load the config file. A missing file yields the default config.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("No config file at {}", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
            message: format!("{}: {}", config_path.display(), e),
        })
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: e.to_string(),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    /// `~/.config/erp-admin/config.toml`
    pub fn config_file_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(Self::file_in(&home.join(".config").join("erp-admin")))
    }

    pub fn file_in(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// Server URL: `ERP_ADMIN_URL` wins over the file.
    pub fn get_url(&self) -> Option<String> {
        env::var(URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.url.clone())
    }

    pub fn set_url(&mut self, url: String) {
        self.url = Some(url.trim_end_matches('/').to_string());
    }

    pub fn effective_timeout(&self) -> u64 {
        self.timeout_seconds
            .unwrap_or(crate::api::client::DEFAULT_TIMEOUT_SECS)
    }

    pub fn effective_items_per_page(&self) -> u32 {
        self.items_per_page
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
    }
}
