use mediator::{DefaultMediator, Mediator, Request, RequestHandler};

use crate::events::ProductDeletedEvent;
use crate::models::product::Product;
use crate::services::catalog_service::SharedCatalogService;
use crate::services::snapshot_service::SharedSnapshotService;

pub struct DeleteProductCommand(pub u64);
impl Request<Option<Product>> for DeleteProductCommand {}

pub struct DeleteProductRequestHandler(
    pub SharedCatalogService,
    pub SharedSnapshotService<Product>,
    pub DefaultMediator,
);

impl RequestHandler<DeleteProductCommand, Option<Product>> for DeleteProductRequestHandler {
    fn handle(&mut self, request: DeleteProductCommand) -> Option<Product> {
        let (removed, products) = {
            let mut catalog = self.0.lock().expect("Could not lock the catalog service");
            let removed = catalog.remove(request.0);
            (removed, catalog.get_all())
        };

        // An unknown id is a no-op: nothing persisted, nothing published.
        let removed = removed?;

        if let Err(e) = self
            .1
            .lock()
            .expect("Could not lock the snapshot service")
            .save(&products)
        {
            log::error!("failed to persist snapshot after delete: {}", e);
        }

        self.2
            .publish(ProductDeletedEvent(removed.clone()))
            .expect("Could not publish the event");

        Some(removed)
    }
}
