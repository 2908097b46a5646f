//! Storage layer
//!
//! Configuration lives in a TOML file; the access token and company are
//! read from the environment and never written to disk.

use crate::error::StorageError;

pub mod config;
pub mod credentials;

type Result<T> = std::result::Result<T, StorageError>;
