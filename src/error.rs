use thiserror::Error;

use crate::services::remote_service::RemoteError;
use crate::services::snapshot_service::SnapshotError;

/// A convenient result type for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Everything that can go wrong while operating on the catalog.
///
/// None of these are fatal to the session: validation failures leave the
/// list untouched, remote failures degrade to an empty catalog, and storage
/// failures never roll back an in-memory mutation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A submitted product did not meet the form contract.
    #[error("{0}")]
    Validation(String),

    /// The remote collection could not be fetched.
    #[error("could not load products: {0}")]
    Remote(#[from] RemoteError),

    /// The snapshot file could not be read or written.
    #[error("snapshot storage failed: {0}")]
    Snapshot(#[from] SnapshotError),
}
