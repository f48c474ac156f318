use todo_core::types::DbId;

/// Failures raised by the repository layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// Zero rows matched or were affected for the given id.
    #[error("ToDo with ID='{0}' is not found")]
    NotFound(DbId),

    /// More than one row shares an id that should be unique.
    #[error("found multiple ToDo rows with ID='{id}' ({count} rows)")]
    DuplicateId { id: DbId, count: usize },

    /// Statement preparation, execution or row decoding failed.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
