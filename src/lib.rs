//! An event-driven product catalog.
//!
//! The catalog holds an in-memory product list for one session. On startup it
//! hydrates from a persisted JSON snapshot or, failing that, from a single
//! read-only fetch against a remote collection. Every mutation flows through
//! a [`mediator::DefaultMediator`] as a command, is mirrored back to the
//! snapshot, and is announced as a domain event.

pub mod commands;
pub mod error;
pub mod events;
pub mod models;
pub mod queries;
pub mod render;
pub mod services;

pub use error::{CatalogError, CatalogResult};
pub use models::product::Product;
pub use services::catalog_service::{CatalogService, SharedCatalogService};
pub use services::remote_service::{ProductSource, RemoteCatalogService, RemoteError};
pub use services::snapshot_service::{SharedSnapshotService, SnapshotError, SnapshotService};
