//! Validation of user input from flags and the config file

use crate::error::{CliError, ConfigError};
use serde_json::Value;

pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(CliError::InvalidArguments("URL cannot be empty".to_string()).into());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CliError::InvalidArguments(format!(
            "Invalid URL '{}': URL must start with http:// or https://",
            url
        ))
        .into());
    }

    Ok(())
}

/// Timeout in whole seconds, at least 1.
pub fn validate_timeout(value: &str) -> crate::Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidValue {
            field: "timeout".to_string(),
            value: value.to_string(),
            reason: "must be a positive number of seconds".to_string(),
        }
        .into()),
    }
}

pub fn validate_items_per_page(value: &str) -> crate::Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            field: "items-per-page".to_string(),
            value: value.to_string(),
            reason: "must be a positive integer".to_string(),
        }
        .into()),
    }
}

pub fn validate_company_id(value: &str) -> crate::Result<()> {
    if value.trim().is_empty() || value.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidValue {
            field: "company".to_string(),
            value: value.to_string(),
            reason: "must be a non-empty id without spaces".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Parse a `--data` argument. Only JSON objects are accepted as payloads.
pub fn parse_json_payload(raw: &str) -> crate::Result<Value> {
    let value: Value = serde_json::from_str(raw).map_err(|e| {
        CliError::InvalidArguments(format!("--data is not valid JSON: {}", e))
    })?;

    if !value.is_object() {
        return Err(
            CliError::InvalidArguments("--data must be a JSON object".to_string()).into(),
        );
    }
    Ok(value)
}
