//! Access token and company selection.
//!
//! Both come from the environment (or CLI flags layered on top by the
//! dispatcher). Nothing here is persisted.

use crate::core::context::RequestContext;
use std::env;

pub const TOKEN_ENV: &str = "ERP_ADMIN_TOKEN";
pub const COMPANY_ENV: &str = "ERP_ADMIN_COMPANY";

fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

pub fn get_token() -> Option<String> {
    non_empty_env(TOKEN_ENV)
}

pub fn get_company() -> Option<String> {
    non_empty_env(COMPANY_ENV)
}

/// Build the request context. Explicit values win over the environment,
/// which wins over `configured_company`.
pub fn resolve_context(
    token: Option<String>,
    company: Option<String>,
    configured_company: Option<String>,
) -> RequestContext {
    let token = token.filter(|t| !t.is_empty()).or_else(get_token);
    let company = company
        .filter(|c| !c.is_empty())
        .or_else(get_company)
        .or(configured_company);

    let mut context = RequestContext::new();
    if let Some(token) = token {
        context = context.with_token(token);
    }
    if let Some(company) = company {
        context = context.with_company(company);
    }
    context
}
