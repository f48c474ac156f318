//! Shared domain types for the ToDo service.
//!
//! Holds the identifier and timestamp aliases, the domain error type, and
//! the request validators that run before any storage access.

pub mod error;
pub mod types;
pub mod version;
