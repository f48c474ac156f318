/// ToDo identities are PostgreSQL BIGSERIAL values, never reused.
pub type DbId = i64;

/// Stored and exchanged timestamps are always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
