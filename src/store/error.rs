//! Account Store Errors
//!
//! Error types for account store operations.

/// Errors that can occur when talking to the account store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached (connection, pool, TLS, IO)
    #[error("Account store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    /// The store refused the operation (constraint violation, unknown account,
    /// exception raised by the routine)
    #[error("Account store rejected the operation: {0}")]
    Rejected(String),

    /// Account creation returned no row
    #[error("Account store did not create an account")]
    NoAccountCreated,

    /// The store answered with something this client cannot decode
    #[error("Unexpected account store response: {0}")]
    Unexpected(#[source] sqlx::Error),
}

impl StoreError {
    /// Check if this error means the store was not reached
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_))
    }

    /// Check if the store itself refused the operation
    pub fn is_rejection(&self) -> bool {
        matches!(self, StoreError::Rejected(_) | StoreError::NoAccountCreated)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => StoreError::Rejected(db_err.message().to_string()),
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Protocol(_) => StoreError::Unavailable(err),
            other => StoreError::Unexpected(other),
        }
    }
}
