use crate::AppError;
use crate::error::CliError;
use crate::storage::config::Config;
use crate::utils::validation::{validate_company_id, validate_items_per_page, validate_timeout, validate_url};
use std::path::PathBuf;

/// Read and change the persisted configuration
pub struct ConfigService {
    config: Config,
}

impl ConfigService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Set a field by its user-facing name
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<(), AppError> {
        match field {
            "url" => {
                validate_url(value)?;
                self.config.set_url(value.to_string());
            }
            "timeout" => self.config.timeout_seconds = Some(validate_timeout(value)?),
            "items-per-page" => self.config.items_per_page = Some(validate_items_per_page(value)?),
            "company" => {
                validate_company_id(value)?;
                self.config.company_id = Some(value.trim().to_string());
            }
            _ => {
                return Err(AppError::Cli(CliError::InvalidArguments(format!(
                    "Unknown field: {}. Use 'url', 'timeout', 'items-per-page' or 'company'",
                    field
                ))));
            }
        }
        Ok(())
    }

    pub fn save_config(&self, path: Option<PathBuf>) -> Result<(), AppError> {
        self.config.save(path).map_err(|e| e.into())
    }

    /// `(field, value)` pairs for display; unset fields show as `None`.
    pub fn entries(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("url", self.config.get_url()),
            (
                "timeout",
                self.config.timeout_seconds.map(|t| format!("{}s", t)),
            ),
            (
                "items-per-page",
                self.config.items_per_page.map(|n| n.to_string()),
            ),
            ("company", self.config.company_id.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_field_accepts_user_facing_names() {
        let mut service = ConfigService::new(Config::default());

        service.set_field("url", "https://erp.example.test/").unwrap();
        service.set_field("timeout", "15").unwrap();
        service.set_field("items-per-page", "50").unwrap();
        service.set_field("company", "4").unwrap();

        let config = service.config();
        assert_eq!(config.url.as_deref(), Some("https://erp.example.test"));
        assert_eq!(config.timeout_seconds, Some(15));
        assert_eq!(config.items_per_page, Some(50));
        assert_eq!(config.company_id.as_deref(), Some("4"));
    }

    #[test]
    fn test_set_field_rejects_unknown_and_invalid() {
        let mut service = ConfigService::new(Config::default());

        let result = service.set_field("timeout_seconds", "10");
        assert!(format!("{:?}", result).contains("Unknown field: timeout_seconds"));

        assert!(service.set_field("url", "erp.example.test").is_err());
        assert!(service.set_field("timeout", "0").is_err());
        assert!(service.set_field("items-per-page", "many").is_err());
        assert_eq!(service.config(), &Config::default());
    }

    #[test]
    fn test_save_config_writes_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut service = ConfigService::new(Config::default());
        service.set_field("company", "12").unwrap();
        service.save_config(Some(path.clone())).unwrap();

        let loaded = Config::load(Some(path)).unwrap();
        assert_eq!(loaded.company_id.as_deref(), Some("12"));
    }
}
