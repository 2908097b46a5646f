//! Business logic: request context, query state, resource bindings, the
//! paginated list and the services behind it.

pub mod context;
pub mod filters;
pub mod list_state;
pub mod query_state;
pub mod resource;
pub mod resources;
pub mod services;
