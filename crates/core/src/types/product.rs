//! Catalog products.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A catalog product.
///
/// Serialized with the camelCase field names of the persisted catalog
/// (`imageUrl`, `isSoldOut`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product id.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price in whole currency units.
    pub price: Price,
    /// Long-form description.
    pub description: String,
    /// Available size labels, in display order.
    pub sizes: Vec<String>,
    /// Image reference: an external URL or an embedded data URI.
    pub image_url: String,
    /// Whether the product is sold out.
    pub is_sold_out: bool,
    /// Category label (e.g. "Evening").
    pub category: String,
}

impl Product {
    /// The size used when the shopper did not pick one.
    #[must_use]
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }

    /// Whether `size` is one of this product's size labels.
    #[must_use]
    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Sizes joined for the admin form ("XS, S, M").
    #[must_use]
    pub fn sizes_label(&self) -> String {
        self.sizes.join(", ")
    }
}

#[allow(clippy::too_many_arguments)]
fn seed(
    id: &str,
    name: &str,
    price: u64,
    description: &str,
    sizes: &[&str],
    image_url: &str,
    is_sold_out: bool,
    category: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::new(price),
        description: description.to_owned(),
        sizes: sizes.iter().map(|s| (*s).to_owned()).collect(),
        image_url: image_url.to_owned(),
        is_sold_out,
        category: category.to_owned(),
    }
}

/// The built-in catalog used when nothing has been persisted yet.
#[must_use]
pub fn initial_products() -> Vec<Product> {
    vec![
        seed(
            "1",
            "Midnight Silk Evening Gown",
            299,
            "A luxurious floor-length silk gown perfect for gala events.",
            &["XS", "S", "M", "L"],
            "https://images.unsplash.com/photo-1595777457583-95e059d581b8?q=80&w=800",
            false,
            "Evening",
        ),
        seed(
            "2",
            "Champagne Cocktail Dress",
            189,
            "Elegant shimmering dress for sophisticated evening parties.",
            &["S", "M", "L"],
            "https://images.unsplash.com/photo-1539109132382-381bb3f1c2b3?q=80&w=800",
            false,
            "Cocktail",
        ),
        seed(
            "3",
            "Rose Quartz Summer Midi",
            145,
            "Lightweight linen blend in a soft rose hue.",
            &["S", "M"],
            "https://images.unsplash.com/photo-1515372039744-b8f02a3ae446?q=80&w=800",
            true,
            "Casual",
        ),
        seed(
            "4",
            "Emerald Velvet Wrap",
            220,
            "Stunning deep green velvet with a classic wrap silhouette.",
            &["M", "L", "XL"],
            "https://images.unsplash.com/photo-1585487000160-6ebcfceb0d03?q=80&w=800",
            false,
            "Evening",
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_products_have_unique_ids() {
        let products = initial_products();
        assert_eq!(products.len(), 4);
        for (i, a) in products.iter().enumerate() {
            for b in &products[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let products = initial_products();
        let product = &products[2];
        let json = serde_json::to_value(product).unwrap();
        assert_eq!(json["imageUrl"], product.image_url.as_str());
        assert_eq!(json["isSoldOut"], true);
        assert_eq!(json["price"], 145);
        assert_eq!(json["id"], "3");
    }

    #[test]
    fn test_default_size_is_first() {
        let products = initial_products();
        let product = &products[0];
        assert_eq!(product.default_size(), Some("XS"));
        assert!(product.has_size("M"));
        assert!(!product.has_size("XL"));
        assert_eq!(product.sizes_label(), "XS, S, M, L");
    }
}
