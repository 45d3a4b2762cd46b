//! Catalog filtering.
//!
//! The visible set is the intersection of a category predicate (with
//! "All" matching everything) and a case-insensitive substring search on
//! the product name. Nothing here is persisted; views recompute it on
//! every render.

use serde::Deserialize;

use super::Product;

/// Category label that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Number of products featured on the home page.
const FEATURED_COUNT: usize = 3;

/// Catalog query (`?category=Evening&q=gown`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CatalogFilter {
    /// Category label; `None`, empty, or "All" means every category.
    #[serde(default)]
    pub category: Option<String>,
    /// Name search text.
    #[serde(default, rename = "q")]
    pub search: Option<String>,
}

impl CatalogFilter {
    /// The active category label ("All" when unfiltered).
    #[must_use]
    pub fn active_category(&self) -> &str {
        match self.category.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => ALL_CATEGORIES,
        }
    }

    /// The search text, trimmed (empty when absent).
    #[must_use]
    pub fn search_text(&self) -> &str {
        self.search.as_deref().map_or("", str::trim)
    }

    /// Whether `product` satisfies both predicates.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let category = self.active_category();
        let matches_category = category == ALL_CATEGORIES || product.category == category;

        let needle = self.search_text().to_lowercase();
        let matches_search = needle.is_empty() || product.name.to_lowercase().contains(&needle);

        matches_category && matches_search
    }

    /// Apply the filter, preserving catalog order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

/// "All" followed by each distinct category in first-seen order.
#[must_use]
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !out.iter().any(|c| *c == product.category) {
            out.push(product.category.clone());
        }
    }
    out
}

/// The first few products that are not sold out.
#[must_use]
pub fn featured(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| !p.is_sold_out)
        .take(FEATURED_COUNT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::initial_products;

    fn filter(category: Option<&str>, search: Option<&str>) -> CatalogFilter {
        CatalogFilter {
            category: category.map(str::to_string),
            search: search.map(str::to_string),
        }
    }

    fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_default_filter_returns_everything() {
        let products = initial_products();
        assert_eq!(CatalogFilter::default().apply(&products).len(), 4);
        assert_eq!(filter(Some("All"), Some("")).apply(&products).len(), 4);
    }

    #[test]
    fn test_category_and_search_intersect() {
        let products = initial_products();
        let visible = filter(Some("Evening"), Some("gown")).apply(&products);
        assert_eq!(names(&visible), vec!["Midnight Silk Evening Gown"]);
        for p in visible {
            assert_eq!(p.category, "Evening");
            assert!(p.name.to_lowercase().contains("gown"));
        }
    }

    #[test]
    fn test_category_only() {
        let products = initial_products();
        let visible = filter(Some("Evening"), None).apply(&products);
        assert_eq!(
            names(&visible),
            vec!["Midnight Silk Evening Gown", "Emerald Velvet Wrap"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = initial_products();
        let visible = filter(None, Some("  VELVET ")).apply(&products);
        assert_eq!(names(&visible), vec!["Emerald Velvet Wrap"]);
    }

    #[test]
    fn test_category_is_exact() {
        let products = initial_products();
        assert!(filter(Some("evening"), None).apply(&products).is_empty());
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(
            categories(&initial_products()),
            vec!["All", "Evening", "Cocktail", "Casual"]
        );
    }

    #[test]
    fn test_featured_skips_sold_out() {
        let products = initial_products();
        let featured = featured(&products);
        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(|p| !p.is_sold_out));
    }

    #[test]
    fn test_deserialize_query() {
        let f: CatalogFilter = serde_json::from_str(r#"{"category":"Casual","q":"midi"}"#)
            .unwrap_or_default();
        assert_eq!(f.active_category(), "Casual");
        assert_eq!(f.search_text(), "midi");
    }
}
