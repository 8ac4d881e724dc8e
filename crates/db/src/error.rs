use paddock_core::error::CoreError;

/// Error type for repository methods that enforce domain rules.
///
/// Plain CRUD methods return `sqlx::Error` directly; methods that run the
/// placement engine can fail on either side of the seam.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
