#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(
        "unsupported API version: service implements API version '{expected}', \
         but asked for '{received}'"
    )]
    UnsupportedVersion { expected: String, received: String },
}
