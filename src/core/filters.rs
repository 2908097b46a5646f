//! Filter shapes for list endpoints.
//!
//! Each resource declares a typed filter struct with [`list_filters!`]; the
//! dynamic [`FilterMap`] covers ad-hoc filters. Only defined values are sent.

use crate::api::query::QueryParams;
use crate::core::services::types::ServiceError;
use std::collections::BTreeMap;
use std::fmt;

pub trait ListFilters: Clone + PartialEq + Default + fmt::Debug + Send + Sync + 'static {
    /// Append every defined filter value to `params`.
    fn append_to(&self, params: &mut QueryParams);

    /// Set a filter from its query key and textual value. An empty value clears it.
    fn set_field(&mut self, key: &str, value: &str) -> Result<(), ServiceError>;
}

/// Define a typed filter struct whose fields map onto query keys.
#[macro_export]
macro_rules! list_filters {
    (
        $(#[$meta:meta])*
        $name:ident { $($field:ident : $ty:ty => $key:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(pub $field: Option<$ty>,)+
        }

        impl $crate::core::filters::ListFilters for $name {
            fn append_to(&self, params: &mut $crate::api::query::QueryParams) {
                $(params.push_opt($key, self.$field.as_ref());)+
            }

            fn set_field(
                &mut self,
                key: &str,
                value: &str,
            ) -> Result<(), $crate::core::services::types::ServiceError> {
                match key {
                    $($key => {
                        self.$field = $crate::core::filters::parse_filter_value::<$ty>(key, value)?;
                        Ok(())
                    })+
                    _ => Err($crate::core::filters::unknown_filter(key, &[$($key),+])),
                }
            }
        }
    };
}

pub fn parse_filter_value<T: std::str::FromStr>(
    key: &str,
    value: &str,
) -> Result<Option<T>, ServiceError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| ServiceError::Validation {
            field: key.to_string(),
            message: format!("'{}' is not a valid value", value),
        })
}

pub fn unknown_filter(key: &str, accepted: &[&str]) -> ServiceError {
    ServiceError::Validation {
        field: key.to_string(),
        message: format!("unknown filter (accepted: {})", accepted.join(", ")),
    }
}

/// Split `key=value` as given on the command line.
pub fn split_filter_arg(arg: &str) -> Result<(&str, &str), ServiceError> {
    match arg.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(ServiceError::Validation {
            field: "filter".to_string(),
            message: format!("'{}' must be in key=value format", arg),
        }),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl FilterValue {
    /// Infer the most specific primitive for a textual value.
    pub fn infer(raw: &str) -> Self {
        if let Ok(b) = raw.parse::<bool>() {
            FilterValue::Bool(b)
        } else if let Ok(i) = raw.parse::<i64>() {
            FilterValue::Integer(i)
        } else if let Ok(f) = raw.parse::<f64>() {
            FilterValue::Float(f)
        } else {
            FilterValue::Text(raw.to_string())
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(s) => f.write_str(s),
            FilterValue::Integer(i) => write!(f, "{}", i),
            FilterValue::Float(x) => write!(f, "{}", x),
            FilterValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// Arbitrary key/value filters, sent in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterMap(BTreeMap<String, FilterValue>);

impl FilterMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FilterValue) -> Option<FilterValue> {
        self.0.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<FilterValue> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ListFilters for FilterMap {
    fn append_to(&self, params: &mut QueryParams) {
        for (key, value) in &self.0 {
            params.push(key, value);
        }
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), ServiceError> {
        let value = value.trim();
        if value.is_empty() {
            self.0.remove(key);
        } else {
            self.0.insert(key.to_string(), FilterValue::infer(value));
        }
        Ok(())
    }
}

list_filters! {
    /// Filter by record status only.
    StatusFilter {
        status: String => "status",
    }
}
