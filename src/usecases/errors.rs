use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    /// Caller-supplied listing breaks a domain invariant. Raised before any
    /// network call.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A listing references a plan or category absent from the catalog.
    /// Always a defect signal; never silently defaulted.
    #[error("catalog desynchronized: {0}")]
    Configuration(String),

    /// Delete was attempted without the caller's explicit confirmation.
    #[error("delete requires explicit confirmation")]
    DeleteNotConfirmed,

    /// The persisted-store adapter failed; carries the transport-level cause.
    #[error(transparent)]
    Persistence(#[from] anyhow::Error),
}

pub type ListingResult<T> = std::result::Result<T, ListingError>;
