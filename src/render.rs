//! Pure text rendering of the catalog. The view is rebuilt from scratch on
//! every call, so rendering the same list twice produces identical output.

use crate::models::product::{Product, BRAND_SENTINEL, PLACEHOLDER_IMAGE};

const DESCRIPTION_LIMIT: usize = 80;
const EMPTY_STATE: &str = "No products yet. Add one to get started.";

/// Rebuilds the complete card view. The heading only appears once there is
/// something to show; an empty list renders a single placeholder line.
pub fn render_catalog(products: &[Product]) -> String {
    if products.is_empty() {
        return format!("{}\n", EMPTY_STATE);
    }

    let mut out = String::from("Products\n========\n");
    for product in products {
        out.push('\n');
        out.push_str(&render_card(product));
    }
    out
}

/// One product card: title, truncated description, image (with placeholder
/// fallback), formatted price, optional brand line, delete affordance.
pub fn render_card(product: &Product) -> String {
    let image = product.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE);

    let mut card = format!(
        "{}\n  {}\n  image: {}\n  price: {}\n",
        product.title,
        truncate(&product.description, DESCRIPTION_LIMIT),
        image,
        format_price(product.price),
    );

    if product.brand != BRAND_SENTINEL {
        card.push_str(&format!("  brand: {}\n", product.brand));
    }

    card.push_str(&format!("  [delete {}]\n", product.id));
    card
}

/// Two decimal places with a dollar sign, or `N/A` when the price is absent.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) => format!("${:.2}", value),
        None => "N/A".to_owned(),
    }
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_owned();
    }

    let cut: String = text.chars().take(limit).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 42,
            title: "Mug".to_owned(),
            description: "Ceramic mug".to_owned(),
            image: Some("http://x/y.png".to_owned()),
            price: Some(9.5),
            brand: "Acme".to_owned(),
        }
    }

    #[test]
    fn prices_render_with_two_decimals_or_na() {
        assert_eq!(format_price(Some(9.5)), "$9.50");
        assert_eq!(format_price(Some(19.99)), "$19.99");
        assert_eq!(format_price(None), "N/A");
    }

    #[test]
    fn empty_list_renders_the_placeholder_without_a_heading() {
        let view = render_catalog(&[]);
        assert!(view.contains("No products"));
        assert!(!view.contains("Products\n========"));
    }

    #[test]
    fn cards_carry_price_brand_and_delete_affordance() {
        let view = render_catalog(&[product()]);
        assert!(view.starts_with("Products\n"));
        assert!(view.contains("Mug"));
        assert!(view.contains("$9.50"));
        assert!(view.contains("brand: Acme"));
        assert!(view.contains("[delete 42]"));
    }

    #[test]
    fn sentinel_brand_is_not_rendered() {
        let mut sentinel = product();
        sentinel.brand = BRAND_SENTINEL.to_owned();
        assert!(!render_card(&sentinel).contains("brand:"));
    }

    #[test]
    fn missing_image_falls_back_to_the_placeholder() {
        let mut no_image = product();
        no_image.image = None;
        assert!(render_card(&no_image).contains(PLACEHOLDER_IMAGE));
    }

    #[test]
    fn long_descriptions_are_truncated_with_an_ellipsis() {
        let mut wordy = product();
        wordy.description = "x".repeat(200);
        let card = render_card(&wordy);
        assert!(card.contains(&format!("{}...", "x".repeat(80))));
        assert!(!card.contains(&"x".repeat(81)));
    }

    #[test]
    fn rendering_is_idempotent() {
        let products = vec![product()];
        assert_eq!(render_catalog(&products), render_catalog(&products));
    }
}
