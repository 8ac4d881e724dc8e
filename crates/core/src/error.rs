/// Domain-level error taxonomy.
///
/// Every rule violation the placement engine can report is a distinct
/// variant, so the HTTP layer can map each one to a status code without
/// string matching. Storage failures are not part of the taxonomy; they
/// surface as `Internal` or as a raw `sqlx::Error` further up.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    #[error("{entity} '{key}' already exists")]
    AlreadyExists { entity: &'static str, key: String },

    #[error("'{0}' is not a known species")]
    InvalidSpecies(String),

    #[error("cage '{cage}' is at capacity")]
    CapacityExceeded { cage: String },

    #[error("incompatible power state: {0}")]
    IncompatiblePowerState(String),

    #[error("incompatible species: {0}")]
    IncompatibleSpecies(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),
}
