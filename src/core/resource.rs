//! Resource bindings: what varies between entity types.

use crate::api::models::RecordId;
use crate::core::filters::ListFilters;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// A table column: header label and the JSON field it reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub header: &'static str,
    pub field: &'static str,
}

impl Column {
    pub const fn new(header: &'static str, field: &'static str) -> Self {
        Self { header, field }
    }
}

/// Static description of one REST resource.
pub trait Resource: Send + Sync + 'static {
    type Record: DeserializeOwned + Serialize + Clone + Debug + Send + Sync + 'static;
    type Filters: ListFilters;

    /// Singular label, used in messages.
    const NAME: &'static str;
    const PLURAL: &'static str;
    /// Collection path relative to the API base URL.
    const PATH: &'static str;
    /// Drop a deleted record from the held page instead of refetching.
    const PRUNE_ON_DELETE: bool = false;
    /// Whether `POST {PATH}/sync` exists.
    const SUPPORTS_SYNC: bool = false;
    const COLUMNS: &'static [Column];

    fn record_id(record: &Self::Record) -> &RecordId;

    fn item_path(id: &RecordId) -> String {
        format!("{}/{}", Self::PATH, id)
    }

    fn sync_path() -> String {
        format!("{}/sync", Self::PATH)
    }
}
