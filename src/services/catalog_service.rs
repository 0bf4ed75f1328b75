use std::sync::{Arc, Mutex};

use crate::models::product::Product;

pub type SharedCatalogService = Arc<Mutex<CatalogService>>;

/// The authoritative in-memory product list for the session.
///
/// Insertion order is preserved; the rendered view and the persisted
/// snapshot both follow it.
#[derive(Debug, Clone, Default)]
pub struct CatalogService {
    products: Vec<Product>,
}

impl CatalogService {
    pub fn new() -> CatalogService {
        CatalogService {
            products: Vec::new(),
        }
    }

    /// Replaces the whole list, used when adopting a snapshot or a remote seed.
    pub fn adopt(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn add(&mut self, product: Product) -> Product {
        self.products.push(product.clone());
        product
    }

    /// Removes the first entry with the given id.
    pub fn remove(&mut self, id: u64) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    /// Empties the list, returning how many products were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.products.len();
        self.products.clear();
        removed
    }

    pub fn get(&self, id: u64) -> Option<Product> {
        self.products.iter().find(|p| p.id == id).cloned()
    }

    pub fn get_all(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str) -> Product {
        Product {
            id,
            title: title.to_owned(),
            description: String::new(),
            image: None,
            price: None,
            brand: "Acme".to_owned(),
        }
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut catalog = CatalogService::new();
        catalog.add(product(2, "second"));
        catalog.add(product(1, "first"));

        let all = catalog.get_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 2);
        assert_eq!(all[1].id, 1);
    }

    #[test]
    fn remove_takes_only_the_first_match() {
        let mut catalog = CatalogService::new();
        catalog.add(product(1, "a"));
        catalog.add(product(1, "b"));

        let removed = catalog.remove(1).unwrap();
        assert_eq!(removed.title, "a");
        assert_eq!(catalog.len(), 1);
        assert!(catalog.remove(99).is_none());
    }

    #[test]
    fn clear_reports_the_dropped_count() {
        let mut catalog = CatalogService::new();
        catalog.add(product(1, "a"));
        catalog.add(product(2, "b"));

        assert_eq!(catalog.clear(), 2);
        assert!(catalog.is_empty());
        assert_eq!(catalog.clear(), 0);
    }
}
