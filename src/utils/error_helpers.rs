use crate::error::{ApiError, DisplayError};

/// Convert reqwest errors to ApiError with endpoint context
pub fn convert_request_error(error: reqwest::Error, endpoint: &str, timeout_secs: u64) -> ApiError {
    if error.is_timeout() {
        return convert_timeout_error(endpoint, timeout_secs);
    }

    ApiError::Transport {
        endpoint: endpoint.to_string(),
        message: error.to_string(),
    }
}

/// Convert timeout errors to ApiError with endpoint context
pub fn convert_timeout_error(endpoint: &str, timeout_secs: u64) -> ApiError {
    ApiError::Timeout {
        timeout_secs,
        endpoint: endpoint.to_string(),
    }
}

/// Convert serde_json errors to DisplayError for output rendering
pub fn convert_serialization_error(error: serde_json::Error, what: &str) -> DisplayError {
    DisplayError::Serialization(format!("{}: {}", what, error))
}

/// Helper macro for serialization errors raised while rendering
#[macro_export]
macro_rules! map_serialization_error {
    ($result:expr, $what:expr) => {
        $result
            .map_err(|e| $crate::utils::error_helpers::convert_serialization_error(e, $what))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_timeout_error() {
        let api_error = convert_timeout_error("/test", 30);

        match api_error {
            ApiError::Timeout {
                endpoint,
                timeout_secs,
            } => {
                assert_eq!(endpoint, "/test");
                assert_eq!(timeout_secs, 30);
            }
            _ => panic!("Expected Timeout error"),
        }
    }

    #[test]
    fn test_convert_serialization_error() {
        let error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let display_error = convert_serialization_error(error, "record");

        match display_error {
            DisplayError::Serialization(msg) => assert!(msg.starts_with("record:")),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[tokio::test]
    async fn test_convert_request_error_connection_refused() {
        // Port 9 (discard) on loopback is expected to refuse connections
        let error = reqwest::Client::new()
            .get("http://127.0.0.1:9/")
            .send()
            .await
            .unwrap_err();

        let api_error = convert_request_error(error, "/zones", 30);
        assert!(matches!(api_error, ApiError::Transport { .. }));
    }
}
