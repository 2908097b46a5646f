//! Typed client for an ERP back-office REST API.
//!
//! The centre of the crate is [`ResourceList`](crate::core::list_state::ResourceList), a
//! paginated view over one resource (warehouses, clients, visits, ...) that
//! keeps its page in sync with search/paging/filter state, discards
//! out-of-order responses and refetches after mutations. Entity types plug
//! in through [`Resource`](crate::core::resource::Resource) bindings.

pub use error::AppError;

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Command-line interface
pub mod core; // Business logic
pub mod storage; // Configuration

/// Support modules (used across layers)
pub mod api; // REST client and wire formats
pub mod display; // Output formatting
pub mod error; // Error handling
pub mod utils; // Shared utilities and helpers

pub type Result<T> = std::result::Result<T, AppError>;

/// Common imports for library users
pub mod prelude {
    pub use crate::api::client::ApiClient;
    pub use crate::api::envelope::Page;
    pub use crate::api::models::RecordId;
    pub use crate::core::context::RequestContext;
    pub use crate::core::list_state::{LoadPhase, ResourceList};
    pub use crate::core::query_state::{QueryState, SortOrder};
    pub use crate::core::resource::Resource;
    pub use crate::core::resources::*;
    pub use crate::core::services::resource_service::ResourceService;
    pub use crate::core::services::types::ServiceError;
}
