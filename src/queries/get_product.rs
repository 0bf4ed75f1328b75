use mediator::{Request, RequestHandler};

use crate::models::product::Product;
use crate::services::catalog_service::SharedCatalogService;

pub struct GetProductRequest(pub u64);
impl Request<Option<Product>> for GetProductRequest {}

pub struct GetProductRequestHandler(pub SharedCatalogService);

impl RequestHandler<GetProductRequest, Option<Product>> for GetProductRequestHandler {
    fn handle(&mut self, request: GetProductRequest) -> Option<Product> {
        self.0
            .lock()
            .expect("Could not lock the catalog service")
            .get(request.0)
    }
}
