use serde::Deserialize;
use thiserror::Error;

use crate::models::product::{Product, BRAND_SENTINEL};

#[derive(Debug, Error)]
pub enum RemoteError {
    /// Transport failure or a non-2xx status from the collection endpoint.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A source-specific failure from a non-HTTP [`ProductSource`].
    #[error("{0}")]
    Source(String),
}

/// A read-only source of seed products, used at most once per session.
///
/// Callers must treat an empty result as "nothing loaded", not as a
/// confirmed zero-product collection.
pub trait ProductSource {
    fn fetch(&self) -> Result<Vec<Product>, RemoteError>;
}

/// The fixed remote collection endpoint.
#[derive(Debug, Clone)]
pub struct RemoteCatalogService {
    client: reqwest::blocking::Client,
    url: String,
}

impl RemoteCatalogService {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            url: url.into(),
        }
    }
}

impl ProductSource for RemoteCatalogService {
    fn fetch(&self) -> Result<Vec<Product>, RemoteError> {
        let records: Vec<RemoteProduct> = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .json()?;

        Ok(records.into_iter().map(Product::from).collect())
    }
}

/// Wire shape of one record from the remote collection.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteProduct {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
}

impl From<RemoteProduct> for Product {
    fn from(record: RemoteProduct) -> Self {
        let brand = record
            .category
            .as_deref()
            .filter(|category| !category.is_empty())
            .map(capitalize)
            .unwrap_or_else(|| BRAND_SENTINEL.to_owned());

        Product {
            id: record.id.unwrap_or_else(Product::next_id),
            title: record.title,
            description: record.description.unwrap_or_default(),
            image: record.image,
            price: record.price,
            brand,
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_record_maps_to_a_product() {
        let json = r#"{"id": 1, "title": "Shirt", "price": 19.99, "category": "clothing"}"#;
        let record: RemoteProduct = serde_json::from_str(json).unwrap();
        let product = Product::from(record);

        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Shirt");
        assert_eq!(product.price, Some(19.99));
        assert_eq!(product.brand, "Clothing");
        assert_eq!(product.description, "");
        assert_eq!(product.image, None);
    }

    #[test]
    fn missing_category_falls_back_to_the_sentinel() {
        let json = r#"{"title": "Mystery box"}"#;
        let record: RemoteProduct = serde_json::from_str(json).unwrap();
        let product = Product::from(record);

        assert_eq!(product.brand, BRAND_SENTINEL);
        // omitted id got generated
        assert!(product.id > 0);
    }

    #[test]
    fn capitalize_touches_only_the_first_letter() {
        assert_eq!(capitalize("clothing"), "Clothing");
        assert_eq!(capitalize("men's clothing"), "Men's clothing");
        assert_eq!(capitalize("X"), "X");
        assert_eq!(capitalize(""), "");
    }
}
