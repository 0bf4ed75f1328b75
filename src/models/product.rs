use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Image URL rendered for products that did not provide one.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// Brand recorded for products that did not declare one.
pub const BRAND_SENTINEL: &str = "Generic";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default = "default_brand")]
    pub brand: String,
}

fn default_brand() -> String {
    BRAND_SENTINEL.to_owned()
}

impl Product {
    /// Generates a fresh id from the current UTC time in milliseconds.
    ///
    /// Uniqueness holds only by construction: two calls within the same
    /// millisecond collide.
    pub fn next_id() -> u64 {
        Utc::now().timestamp_millis() as u64
    }
}

impl PartialEq<Self> for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_get_defaults() {
        let json = r#"{"id": 7, "title": "Mug", "description": "Ceramic mug"}"#;
        let product: Product = serde_json::from_str(json).unwrap();

        assert_eq!(product.image, None);
        assert_eq!(product.price, None);
        assert_eq!(product.brand, BRAND_SENTINEL);
    }

    #[test]
    fn equality_is_by_id() {
        let a = Product {
            id: 1,
            title: "Mug".to_owned(),
            description: "Ceramic mug".to_owned(),
            image: None,
            price: Some(9.5),
            brand: "Acme".to_owned(),
        };
        let mut b = a.clone();
        b.title = "Different".to_owned();

        assert_eq!(a, b);
    }
}
