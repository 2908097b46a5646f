use crate::error::ApiError;

/// Service layer error types
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Not found: {resource_type} with ID {id}")]
    NotFound { resource_type: String, id: String },

    #[error("Operation '{operation}' is not supported for {resource_type}")]
    Unsupported {
        resource_type: String,
        operation: String,
    },
}

impl ServiceError {
    /// Text suitable for showing to a user: the server's own message when it
    /// sent one, otherwise `fallback`. Validation failures describe themselves.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ServiceError::Api(api_error) => api_error
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
            ServiceError::Validation { .. } | ServiceError::Unsupported { .. } => self.to_string(),
            ServiceError::NotFound { .. } => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_message() {
        let err = ServiceError::Api(ApiError::Http {
            status: 400,
            endpoint: "/zones".to_string(),
            message: Some("name already taken".to_string()),
        });
        assert_eq!(err.user_message("Failed to create zone"), "name already taken");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ServiceError::Api(ApiError::Http {
            status: 500,
            endpoint: "/zones".to_string(),
            message: None,
        });
        assert_eq!(err.user_message("Failed to load zones"), "Failed to load zones");

        let err = ServiceError::Api(ApiError::Transport {
            endpoint: "/zones".to_string(),
            message: "connection reset".to_string(),
        });
        assert_eq!(err.user_message("Failed to load zones"), "Failed to load zones");
    }

    #[test]
    fn test_user_message_validation() {
        let err = ServiceError::Validation {
            field: "id".to_string(),
            message: "must not be empty".to_string(),
        };
        assert_eq!(
            err.user_message("ignored"),
            "Validation error: id: must not be empty"
        );
    }
}
