//! Per-entity bindings.
//!
//! Each binding names an endpoint, a record type, a filter shape and the
//! columns shown in tables. All list/CRUD behaviour lives in the generic
//! service and list types.

pub mod catalog;
pub mod logistics;
pub mod organization;
pub mod partners;

pub use catalog::{Currencies, Products, Taxes};
pub use logistics::{Visits, Warehouses, Zones};
pub use organization::{Companies, Organizations, Users};
pub use partners::{Clients, PaymentMethods, PaymentTerms, Suppliers};
