use thiserror::Error;

pub type Result<T> = std::result::Result<T, TournamentError>;

/// Error taxonomy for the tournament core.
///
/// No operation retries or recovers locally; every failure surfaces to the
/// caller unchanged. Presentation is the caller's concern.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// The record store could not be reached or the query failed in transit.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store rejected a write (duplicate id, unknown player reference).
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Rejected before any store access.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<rusqlite::Error> for TournamentError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, _)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                TournamentError::ConstraintViolation(err.to_string())
            }
            _ => TournamentError::StoreUnavailable(err.to_string()),
        }
    }
}

impl From<r2d2::Error> for TournamentError {
    fn from(err: r2d2::Error) -> Self {
        TournamentError::StoreUnavailable(err.to_string())
    }
}
