//! Tests for `AppError` → `tonic::Status` mapping.
//!
//! These do not need a server or a database: they convert `AppError`
//! values directly and inspect the resulting status.

use todo_api::error::AppError;
use todo_core::error::CoreError;
use todo_db::DbError;
use tonic::{Code, Status};

fn status_of(err: impl Into<AppError>) -> Status {
    Status::from(err.into())
}

// ---------------------------------------------------------------------------
// Test: unsupported API version maps to UNIMPLEMENTED with both versions
// ---------------------------------------------------------------------------

#[test]
fn unsupported_version_maps_to_unimplemented() {
    let status = status_of(CoreError::UnsupportedVersion {
        expected: "v1".into(),
        received: "v9".into(),
    });

    assert_eq!(status.code(), Code::Unimplemented);
    assert!(status.message().contains("'v1'"));
    assert!(status.message().contains("'v9'"));
}

// ---------------------------------------------------------------------------
// Test: validation failures map to INVALID_ARGUMENT
// ---------------------------------------------------------------------------

#[test]
fn validation_error_maps_to_invalid_argument() {
    let status = status_of(CoreError::Validation("title must not be blank".into()));

    assert_eq!(status.code(), Code::InvalidArgument);
    assert_eq!(status.message(), "title must not be blank");
}

#[test]
fn bad_timestamp_maps_to_invalid_argument() {
    let status = status_of(AppError::InvalidArgument(
        "insert_at has invalid format-> nanos -1 outside [0, 1000000000)".into(),
    ));

    assert_eq!(status.code(), Code::InvalidArgument);
    assert!(status.message().starts_with("insert_at"));
}

// ---------------------------------------------------------------------------
// Test: zero rows maps to NOT_FOUND naming the id
// ---------------------------------------------------------------------------

#[test]
fn repository_not_found_maps_to_not_found() {
    let status = status_of(DbError::NotFound(42));

    assert_eq!(status.code(), Code::NotFound);
    assert_eq!(status.message(), "ToDo with ID='42' is not found");
}

// ---------------------------------------------------------------------------
// Test: storage failures map to UNKNOWN and keep the driver text
// ---------------------------------------------------------------------------

#[test]
fn duplicate_identity_maps_to_unknown() {
    let status = status_of(DbError::DuplicateId { id: 3, count: 2 });

    assert_eq!(status.code(), Code::Unknown);
    assert!(status.message().contains("ID='3'"));
}

#[test]
fn statement_failure_maps_to_unknown_with_driver_text() {
    let status = status_of(DbError::Sqlx(sqlx::Error::Protocol(
        "unexpected message from server".into(),
    )));

    assert_eq!(status.code(), Code::Unknown);
    assert!(status.message().contains("unexpected message from server"));
}

#[test]
fn connection_failure_maps_to_unknown() {
    let status = Status::from(AppError::Connection(sqlx::Error::PoolTimedOut));

    assert_eq!(status.code(), Code::Unknown);
    assert!(status.message().starts_with("failed to connect to database"));
}

#[test]
fn internal_error_maps_to_unknown() {
    let status = status_of(AppError::Internal("stored timestamp cannot be encoded".into()));

    assert_eq!(status.code(), Code::Unknown);
    assert_eq!(status.message(), "stored timestamp cannot be encoded");
}
