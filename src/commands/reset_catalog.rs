use mediator::{DefaultMediator, Mediator, Request, RequestHandler};

use crate::events::CatalogClearedEvent;
use crate::models::product::Product;
use crate::services::catalog_service::SharedCatalogService;
use crate::services::snapshot_service::SharedSnapshotService;

/// Clears the list and the snapshot unconditionally.
pub struct ResetCatalogCommand;
impl Request<usize> for ResetCatalogCommand {}

pub struct ResetCatalogRequestHandler(
    pub SharedCatalogService,
    pub SharedSnapshotService<Product>,
    pub DefaultMediator,
);

impl RequestHandler<ResetCatalogCommand, usize> for ResetCatalogRequestHandler {
    fn handle(&mut self, _: ResetCatalogCommand) -> usize {
        let removed = self
            .0
            .lock()
            .expect("Could not lock the catalog service")
            .clear();

        if let Err(e) = self
            .1
            .lock()
            .expect("Could not lock the snapshot service")
            .clear()
        {
            log::error!("failed to clear the snapshot: {}", e);
        }

        self.2
            .publish(CatalogClearedEvent(removed))
            .expect("Could not publish the event");

        removed
    }
}
