use mediator::{Request, RequestHandler};

use crate::models::product::Product;
use crate::services::catalog_service::SharedCatalogService;

pub struct GetAllProductsRequest;
impl Request<Vec<Product>> for GetAllProductsRequest {}

pub struct GetAllProductsRequestHandler(pub SharedCatalogService);

impl RequestHandler<GetAllProductsRequest, Vec<Product>> for GetAllProductsRequestHandler {
    fn handle(&mut self, _: GetAllProductsRequest) -> Vec<Product> {
        self.0
            .lock()
            .expect("Could not lock the catalog service")
            .get_all()
    }
}
