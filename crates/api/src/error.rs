use todo_core::error::CoreError;
use todo_db::DbError;
use tonic::Status;

/// Application-level error type for gRPC handlers.
///
/// Wraps [`CoreError`] and [`DbError`] and adds transport-specific variants.
/// Converts into [`tonic::Status`] so handlers can use `?` directly.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `todo_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository error from `todo_db`.
    #[error(transparent)]
    Db(#[from] DbError),

    /// No pooled connection could be acquired.
    #[error("failed to connect to database-> {0}")]
    Connection(sqlx::Error),

    /// Malformed request payload.
    #[error("{0}")]
    InvalidArgument(String),

    /// An internal error with a human-readable message.
    #[error("{0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        match &err {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::UnsupportedVersion { .. } => Status::unimplemented(err.to_string()),
                CoreError::Validation(msg) => Status::invalid_argument(msg.clone()),
            },

            // --- Repository errors ---
            AppError::Db(db) => match db {
                DbError::NotFound(_) => Status::not_found(db.to_string()),
                DbError::DuplicateId { .. } => {
                    tracing::error!(error = %db, "ToDo identity integrity violation");
                    Status::unknown(db.to_string())
                }
                DbError::Sqlx(sqlx_err) => classify_sqlx_error(sqlx_err),
            },

            AppError::Connection(source) => {
                tracing::error!(error = %source, "Failed to acquire database connection");
                Status::unknown(err.to_string())
            }

            AppError::InvalidArgument(msg) => Status::invalid_argument(msg.clone()),

            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                Status::unknown(msg.clone())
            }
        }
    }
}

/// Classify a statement failure into a gRPC status.
///
/// - Check-constraint violations (SQLSTATE `23514`) and datetime overflow
///   (`22008`) are caused by request values and map to `INVALID_ARGUMENT`.
/// - Everything else maps to `UNKNOWN` with the driver's message attached.
fn classify_sqlx_error(err: &sqlx::Error) -> Status {
    if let sqlx::Error::Database(db_err) = err {
        match db_err.code().as_deref() {
            Some("23514") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                return Status::invalid_argument(format!(
                    "value violates check constraint: {constraint}"
                ));
            }
            Some("22008") => {
                return Status::invalid_argument(format!("timestamp out of range: {db_err}"));
            }
            _ => {}
        }
    }
    tracing::error!(error = %err, "Database error");
    Status::unknown(format!("database operation failed-> {err}"))
}
