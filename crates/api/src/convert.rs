//! Conversions between protobuf messages and database models.
//!
//! PostgreSQL `TIMESTAMPTZ` keeps microseconds, so incoming timestamps are
//! truncated to microsecond precision before they are written. Values at
//! that granularity round-trip exactly.

use chrono::{DateTime, Utc};
use todo_core::types::Timestamp;
use todo_db::models::todo::ToDo;

use crate::error::{AppError, AppResult};
use crate::proto;

const NANOS_PER_SECOND: i32 = 1_000_000_000;
const NANOS_PER_MICRO: u32 = 1_000;

/// Decode a protobuf timestamp into a UTC datetime.
///
/// `field` names the request field in the error message.
pub fn timestamp_from_proto(ts: &prost_types::Timestamp, field: &str) -> AppResult<Timestamp> {
    if !(0..NANOS_PER_SECOND).contains(&ts.nanos) {
        return Err(AppError::InvalidArgument(format!(
            "{field} has invalid format-> nanos {} outside [0, {NANOS_PER_SECOND})",
            ts.nanos
        )));
    }
    let nanos = ts.nanos as u32;
    let micros_aligned = nanos - nanos % NANOS_PER_MICRO;

    DateTime::<Utc>::from_timestamp(ts.seconds, micros_aligned).ok_or_else(|| {
        AppError::InvalidArgument(format!(
            "{field} has invalid format-> seconds {} out of range",
            ts.seconds
        ))
    })
}

/// Decode a timestamp field that the request must carry.
pub fn required_timestamp(
    ts: Option<&prost_types::Timestamp>,
    field: &str,
) -> AppResult<Timestamp> {
    match ts {
        Some(ts) => timestamp_from_proto(ts, field),
        None => Err(AppError::InvalidArgument(format!("{field} is required"))),
    }
}

/// Encode a UTC datetime as a protobuf timestamp.
///
/// Fails for leap-second values, which protobuf cannot represent.
pub fn timestamp_to_proto(dt: Timestamp) -> AppResult<prost_types::Timestamp> {
    let nanos = i32::try_from(dt.timestamp_subsec_nanos())
        .ok()
        .filter(|n| *n < NANOS_PER_SECOND)
        .ok_or_else(|| {
            AppError::Internal(format!("stored timestamp {dt} cannot be encoded"))
        })?;

    Ok(prost_types::Timestamp {
        seconds: dt.timestamp(),
        nanos,
    })
}

/// Convert a database row into its protobuf message.
pub fn todo_to_proto(todo: ToDo) -> AppResult<proto::ToDo> {
    Ok(proto::ToDo {
        id: todo.id,
        title: todo.title,
        description: todo.description,
        insert_at: Some(timestamp_to_proto(todo.insert_at)?),
        update_at: Some(timestamp_to_proto(todo.update_at)?),
    })
}
