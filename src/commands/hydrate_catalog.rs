use std::sync::{Arc, Mutex};

use mediator::{DefaultMediator, Mediator, Request, RequestHandler};

use crate::events::CatalogHydratedEvent;
use crate::models::product::Product;
use crate::services::catalog_service::SharedCatalogService;
use crate::services::remote_service::ProductSource;
use crate::services::snapshot_service::SharedSnapshotService;

/// First-load hydration: adopt a non-empty snapshot if one exists, otherwise
/// seed the catalog from the remote source exactly once.
pub struct HydrateCatalogCommand;
impl Request<HydrateOutcome> for HydrateCatalogCommand {}

/// Where the session's initial list came from. `Unavailable` is terminal:
/// there is no retry, the catalog simply starts empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrateOutcome {
    FromSnapshot(usize),
    FromRemote(usize),
    Unavailable,
}

pub struct HydrateCatalogRequestHandler<S>(
    pub SharedCatalogService,
    pub SharedSnapshotService<Product>,
    pub Arc<Mutex<S>>,
    pub DefaultMediator,
);

impl<S> RequestHandler<HydrateCatalogCommand, HydrateOutcome> for HydrateCatalogRequestHandler<S>
where
    S: ProductSource + 'static,
{
    fn handle(&mut self, _: HydrateCatalogCommand) -> HydrateOutcome {
        let snapshot = {
            let mut store = self.1.lock().expect("Could not lock the snapshot service");
            match store.load() {
                Ok(values) => values,
                Err(e) => {
                    log::warn!("could not read the snapshot: {}", e);
                    None
                }
            }
        };

        if let Some(products) = snapshot.filter(|products| !products.is_empty()) {
            let count = products.len();
            self.0
                .lock()
                .expect("Could not lock the catalog service")
                .adopt(products);

            let outcome = HydrateOutcome::FromSnapshot(count);
            self.3
                .publish(CatalogHydratedEvent(outcome.clone()))
                .expect("Could not publish the event");
            return outcome;
        }

        let fetched = self
            .2
            .lock()
            .expect("Could not lock the product source")
            .fetch();

        match fetched {
            Ok(products) if !products.is_empty() => {
                let count = products.len();

                if let Err(e) = self
                    .1
                    .lock()
                    .expect("Could not lock the snapshot service")
                    .save(&products)
                {
                    log::error!("failed to persist the remote seed: {}", e);
                }

                self.0
                    .lock()
                    .expect("Could not lock the catalog service")
                    .adopt(products);

                let outcome = HydrateOutcome::FromRemote(count);
                self.3
                    .publish(CatalogHydratedEvent(outcome.clone()))
                    .expect("Could not publish the event");
                outcome
            }
            Ok(_) => {
                log::warn!("remote source returned no products");
                HydrateOutcome::Unavailable
            }
            Err(e) => {
                log::error!("could not fetch products: {}", e);
                HydrateOutcome::Unavailable
            }
        }
    }
}
