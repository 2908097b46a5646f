use crate::api::envelope::{extract_message, extract_message_from_text, is_rejected};
use crate::core::context::RequestContext;
use crate::error::ApiError;
use crate::utils::error_helpers::convert_request_error;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("erp-admin/", env!("CARGO_PKG_VERSION"));
pub const COMPANY_HEADER: &str = "x-company-id";

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    pub base_url: String,
    timeout_secs: u64,
}

impl ApiClient {
    // Create client with default settings
    pub fn new(base_url: String) -> Result<Self, ApiError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: String, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| convert_request_error(e, "client_init", timeout_secs))?;

        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        context: &RequestContext,
    ) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.request(method, url);

        if let Some(token) = context.token() {
            request = request.bearer_auth(token);
        }
        if let Some(company) = context.company_id() {
            request = request.header(COMPANY_HEADER, company);
        }

        request
    }

    pub async fn get(
        &self,
        path: &str,
        context: &RequestContext,
        query: &[(String, String)],
    ) -> Result<Value, ApiError> {
        let request = self.build_request(Method::GET, path, context).query(query);
        self.execute(request, path).await
    }

    pub async fn post(
        &self,
        path: &str,
        context: &RequestContext,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let mut request = self.build_request(Method::POST, path, context);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request, path).await
    }

    pub async fn patch(
        &self,
        path: &str,
        context: &RequestContext,
        body: &Value,
    ) -> Result<Value, ApiError> {
        let request = self.build_request(Method::PATCH, path, context).json(body);
        self.execute(request, path).await
    }

    pub async fn delete(&self, path: &str, context: &RequestContext) -> Result<Value, ApiError> {
        let request = self.build_request(Method::DELETE, path, context);
        self.execute(request, path).await
    }

    async fn execute(&self, request: RequestBuilder, endpoint: &str) -> Result<Value, ApiError> {
        log::debug!("Sending request to {}", endpoint);

        let response = request
            .send()
            .await
            .map_err(|e| convert_request_error(e, endpoint, self.timeout_secs))?;

        self.handle_response(response, endpoint).await
    }

    /// Map a response onto the envelope contract.
    ///
    /// Empty 2xx bodies decode as `Value::Null`; a 2xx body reporting
    /// `success: false` becomes [`ApiError::Rejected`].
    pub async fn handle_response(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<Value, ApiError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| convert_request_error(e, endpoint, self.timeout_secs))?;

        if status.is_success() {
            if text.trim().is_empty() {
                return Ok(Value::Null);
            }

            let body: Value =
                serde_json::from_str(&text).map_err(|e| ApiError::UnexpectedResponse {
                    endpoint: endpoint.to_string(),
                    message: format!("Failed to parse response: {}", e),
                })?;

            if is_rejected(&body) {
                return Err(ApiError::Rejected {
                    endpoint: endpoint.to_string(),
                    message: extract_message(&body),
                });
            }

            return Ok(body);
        }

        let server_message = extract_message_from_text(&text);

        match status.as_u16() {
            401 | 403 => Err(ApiError::Unauthorized {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                server_message,
            }),
            _ => Err(ApiError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                message: server_message,
            }),
        }
    }
}
