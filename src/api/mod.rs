//! HTTP boundary: client, response envelopes, query encoding and record models.

pub mod client;
pub mod envelope;
pub mod models;
pub mod query;
