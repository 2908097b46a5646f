//! Shared helpers used across the CLI, display and service layers.

pub mod error_helpers;
pub mod logging;
pub mod text;
pub mod validation;
