//! Response envelope handling.
//!
//! Every endpoint wraps its payload as `{ success, data }`. List endpoints nest
//! a page inside: `{ success, data: { data: [..], total, totalPages } }`.

use crate::error::ApiError;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// One page of records plus the server's pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            total_pages: 0,
        }
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPayload {
    data: Vec<Value>,
    total: u64,
    total_pages: u64,
}

/// Decode a list envelope.
///
/// A body that does not match the list envelope yields an empty page and a
/// warning instead of an error. Inside a well-formed envelope, records that
/// fail to decode are skipped and counted in a warning; the rest are kept.
pub fn decode_page<T: DeserializeOwned>(body: Value, endpoint: &str) -> Page<T> {
    let payload = match body {
        Value::Object(mut map) => map.remove("data"),
        _ => None,
    };

    let Some(payload) = payload else {
        log::warn!(
            "Unexpected list response from {}: missing 'data' field, treating as empty page",
            endpoint
        );
        return Page::default();
    };

    match serde_json::from_value::<ListPayload>(payload) {
        Ok(list) => {
            let received = list.data.len();
            let mut first_error = None;
            let items: Vec<T> = list
                .data
                .into_iter()
                .filter_map(|item| match serde_json::from_value(item) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        first_error.get_or_insert(e);
                        None
                    }
                })
                .collect();

            if let Some(e) = first_error {
                log::warn!(
                    "Skipped {} of {} records from {}: {}",
                    received - items.len(),
                    received,
                    endpoint,
                    e
                );
            }

            Page {
                items,
                total: list.total,
                total_pages: list.total_pages,
            }
        }
        Err(e) => {
            log::warn!(
                "Unexpected list response from {}: {}, treating as empty page",
                endpoint,
                e
            );
            Page::default()
        }
    }
}

/// Decode a single-record envelope `{ success, data: T }`.
pub fn decode_record<T: DeserializeOwned>(body: Value, endpoint: &str) -> Result<T, ApiError> {
    let payload = match body {
        Value::Object(mut map) => map.remove("data"),
        _ => None,
    }
    .ok_or_else(|| ApiError::UnexpectedResponse {
        endpoint: endpoint.to_string(),
        message: "missing 'data' field".to_string(),
    })?;

    serde_json::from_value(payload).map_err(|e| ApiError::UnexpectedResponse {
        endpoint: endpoint.to_string(),
        message: format!("Failed to parse record: {}", e),
    })
}

/// A 2xx body that explicitly reports `success: false`.
pub fn is_rejected(body: &Value) -> bool {
    body.get("success").and_then(Value::as_bool) == Some(false)
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{ "message": "..." }` and `{ "message": ["...", "..."] }`.
pub fn extract_message(body: &Value) -> Option<String> {
    let message = match body.get("message")? {
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };

    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

/// Like [`extract_message`], for a raw body that may not be JSON at all.
pub fn extract_message_from_text(text: &str) -> Option<String> {
    serde_json::from_str::<Value>(text)
        .ok()
        .and_then(|body| extract_message(&body))
}
