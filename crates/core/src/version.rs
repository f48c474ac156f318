//! Request validators shared by every RPC.
//!
//! These run before a storage connection is acquired, so a rejected request
//! never touches the database.

use crate::error::CoreError;

/// API version implemented by this service.
pub const API_VERSION: &str = "v1";

/// Check the caller-declared API version against the supported one.
///
/// An empty `requested` string means the caller has no preference and is
/// always accepted.
pub fn check_api(supported: &str, requested: &str) -> Result<(), CoreError> {
    if requested.is_empty() || requested == supported {
        return Ok(());
    }
    Err(CoreError::UnsupportedVersion {
        expected: supported.to_string(),
        received: requested.to_string(),
    })
}

/// Reject titles that are empty or whitespace only.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("title must not be blank".into()));
    }
    Ok(())
}
