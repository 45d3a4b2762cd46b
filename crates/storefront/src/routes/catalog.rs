//! Catalog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use aura_exotixx_core::{ALL_CATEGORIES, CatalogFilter, Product, ProductId};
use axum::{
    extract::{Path, Query},
    response::IntoResponse,
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireUser;
use crate::models::{Layout, nav};

/// A category filter link.
#[derive(Debug, Clone)]
pub struct CategoryTab {
    pub label: String,
    pub href: String,
    pub active: bool,
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct CatalogTemplate {
    pub layout: Layout,
    pub tabs: Vec<CategoryTab>,
    pub category: String,
    pub search: String,
    /// This listing's own URL, so adding to the bag comes back here.
    pub return_to: String,
    pub products: Vec<Product>,
}

/// Product detail template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/show.html")]
pub struct ProductTemplate {
    pub layout: Layout,
    pub product: Product,
}

/// Catalog listing filtered by category and name search.
///
/// GET /catalog?category=Evening&q=gown
#[instrument(skip(store))]
pub async fn index(
    RequireUser(store): RequireUser,
    Query(filter): Query<CatalogFilter>,
) -> impl IntoResponse {
    let active = filter.active_category().to_string();
    let search = filter.search_text().to_string();

    let tabs = store
        .categories()
        .into_iter()
        .map(|label| CategoryTab {
            href: catalog_href(&label, &search),
            active: label == active,
            label,
        })
        .collect();

    CatalogTemplate {
        layout: Layout::new(&store, nav::CATALOG),
        tabs,
        products: store.filtered(&filter).into_iter().cloned().collect(),
        return_to: catalog_href(&active, &search),
        category: active,
        search,
    }
}

/// Product detail with size selection.
///
/// GET /catalog/{id}
#[instrument(skip(store))]
pub async fn show(
    RequireUser(store): RequireUser,
    Path(id): Path<String>,
) -> Result<ProductTemplate> {
    let id = ProductId::new(id);
    let product = store
        .product(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductTemplate {
        layout: Layout::new(&store, nav::CATALOG),
        product,
    })
}

/// Link to the catalog filtered by `category`, keeping the search text.
fn catalog_href(category: &str, search: &str) -> String {
    let mut params = Vec::new();
    if category != ALL_CATEGORIES {
        params.push(format!("category={}", urlencoding::encode(category)));
    }
    if !search.is_empty() {
        params.push(format!("q={}", urlencoding::encode(search)));
    }

    if params.is_empty() {
        "/catalog".to_string()
    } else {
        format!("/catalog?{}", params.join("&"))
    }
}
