use mediator::{DefaultMediator, Mediator, Request, RequestHandler};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::events::ProductAddedEvent;
use crate::models::product::{Product, BRAND_SENTINEL};
use crate::services::catalog_service::SharedCatalogService;
use crate::services::snapshot_service::SharedSnapshotService;

/// The five form fields. Everything except the brand is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddProductCommand {
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub brand: Option<String>,
}

impl Request<CatalogResult<Product>> for AddProductCommand {}

impl AddProductCommand {
    /// Checks the form contract: the text fields must be non-empty and the
    /// price must be a positive finite number.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.title.trim().is_empty()
            || self.description.trim().is_empty()
            || self.image.trim().is_empty()
        {
            return Err(CatalogError::Validation(
                "Please fill in all fields".to_owned(),
            ));
        }

        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(CatalogError::Validation(
                "Price must be a positive number".to_owned(),
            ));
        }

        Ok(())
    }
}

pub struct AddProductRequestHandler(
    pub SharedCatalogService,
    pub SharedSnapshotService<Product>,
    pub DefaultMediator,
);

impl RequestHandler<AddProductCommand, CatalogResult<Product>> for AddProductRequestHandler {
    fn handle(&mut self, command: AddProductCommand) -> CatalogResult<Product> {
        command.validate()?;

        let brand = command
            .brand
            .map(|brand| brand.trim().to_owned())
            .filter(|brand| !brand.is_empty())
            .unwrap_or_else(|| BRAND_SENTINEL.to_owned());

        let product = Product {
            id: Product::next_id(),
            title: command.title.trim().to_owned(),
            description: command.description.trim().to_owned(),
            image: Some(command.image.trim().to_owned()),
            price: Some(command.price),
            brand,
        };

        let products = {
            let mut catalog = self.0.lock().expect("Could not lock the catalog service");
            catalog.add(product.clone());
            catalog.get_all()
        };

        // The in-memory list stays authoritative even if the mirror fails.
        if let Err(e) = self
            .1
            .lock()
            .expect("Could not lock the snapshot service")
            .save(&products)
        {
            log::error!("failed to persist snapshot after add: {}", e);
        }

        self.2
            .publish(ProductAddedEvent(product.clone()))
            .expect("Could not publish the event");

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> AddProductCommand {
        AddProductCommand {
            title: "Mug".to_owned(),
            description: "Ceramic mug".to_owned(),
            image: "http://x/y.png".to_owned(),
            price: 9.5,
            brand: Some("Acme".to_owned()),
        }
    }

    #[test]
    fn a_complete_command_validates() {
        assert!(command().validate().is_ok());
    }

    #[test]
    fn blank_required_fields_are_rejected() {
        for field in ["title", "description", "image"] {
            let mut cmd = command();
            match field {
                "title" => cmd.title = "  ".to_owned(),
                "description" => cmd.description = String::new(),
                _ => cmd.image = "\t".to_owned(),
            }
            assert!(
                matches!(cmd.validate(), Err(CatalogError::Validation(_))),
                "expected {} to be required",
                field
            );
        }
    }

    #[test]
    fn non_positive_or_non_finite_prices_are_rejected() {
        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut cmd = command();
            cmd.price = price;
            assert!(matches!(cmd.validate(), Err(CatalogError::Validation(_))));
        }
    }
}
