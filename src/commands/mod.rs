pub mod add_product;
pub mod delete_product;
pub mod hydrate_catalog;
pub mod reset_catalog;

pub use add_product::{AddProductCommand, AddProductRequestHandler};
pub use delete_product::{DeleteProductCommand, DeleteProductRequestHandler};
pub use hydrate_catalog::{HydrateCatalogCommand, HydrateCatalogRequestHandler, HydrateOutcome};
pub use reset_catalog::{ResetCatalogCommand, ResetCatalogRequestHandler};
