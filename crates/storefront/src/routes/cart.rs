//! Cart route handlers.
//!
//! Every action is a plain form post followed by a redirect; the cart is
//! written through to the session before the redirect is issued.

use askama::Template;
use askama_web::WebTemplate;
use aura_exotixx_core::{CartItem, Price, ProductId};
use axum::{
    Form,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireUser;
use crate::models::{Layout, nav};

// =============================================================================
// Form Types
// =============================================================================

/// Add-to-bag form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    /// Chosen size; blank or missing picks the product's first size.
    #[serde(default)]
    pub size: Option<String>,
    /// Local path to return to after adding.
    #[serde(default)]
    pub return_to: Option<String>,
}

/// Quantity step form data.
#[derive(Debug, Deserialize)]
pub struct UpdateQuantityForm {
    pub product_id: String,
    pub size: String,
    pub delta: i64,
}

/// Remove line form data.
#[derive(Debug, Deserialize)]
pub struct RemoveForm {
    pub product_id: String,
    pub size: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Bag page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub layout: Layout,
    pub items: Vec<CartItem>,
    pub total: Price,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the bag.
#[instrument(skip_all)]
pub async fn show(RequireUser(store): RequireUser) -> impl IntoResponse {
    CartTemplate {
        layout: Layout::new(&store, nav::CART),
        items: store.cart().items().to_vec(),
        total: store.cart_total(),
    }
}

/// Add one unit of a product to the bag.
///
/// POST /cart/add
#[instrument(skip(store))]
pub async fn add(
    RequireUser(mut store): RequireUser,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let id = ProductId::new(form.product_id);
    let product = store
        .product(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    if product.is_sold_out {
        return Err(AppError::BadRequest(format!("{} is sold out", product.name)));
    }

    let size = match form.size.as_deref().map(str::trim) {
        Some(size) if !size.is_empty() => size.to_string(),
        _ => product
            .default_size()
            .ok_or_else(|| AppError::BadRequest(format!("{} has no sizes", product.name)))?
            .to_string(),
    };
    if !product.has_size(&size) {
        return Err(AppError::BadRequest(format!(
            "{} is not offered in size {size}",
            product.name
        )));
    }

    store.add_to_cart(&product, &size).await?;
    add_breadcrumb(
        "cart",
        "Added to bag",
        Some(&[("product_id", id.as_str()), ("size", size.as_str())]),
    );
    tracing::info!(product_id = %id, size = %size, count = store.cart_count(), "Added to bag");

    Ok(Redirect::to(return_path(form.return_to.as_deref())))
}

/// Step a line's quantity up or down (never below 1).
///
/// POST /cart/update
#[instrument(skip(store))]
pub async fn update(
    RequireUser(mut store): RequireUser,
    Form(form): Form<UpdateQuantityForm>,
) -> Result<Redirect> {
    let id = ProductId::new(form.product_id);
    if store
        .update_quantity(&id, &form.size, form.delta)
        .await?
        .is_none()
    {
        tracing::debug!(product_id = %id, size = %form.size, "Quantity update for missing line");
    }
    Ok(Redirect::to("/cart"))
}

/// Remove a line from the bag.
///
/// POST /cart/remove
#[instrument(skip(store))]
pub async fn remove(
    RequireUser(mut store): RequireUser,
    Form(form): Form<RemoveForm>,
) -> Result<Redirect> {
    let id = ProductId::new(form.product_id);
    store.remove_from_cart(&id, &form.size).await?;
    Ok(Redirect::to("/cart"))
}

/// Where to send the shopper after adding: a local path, or the bag.
fn return_path(requested: Option<&str>) -> &str {
    match requested {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path
        }
        _ => "/cart",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_path() {
        assert_eq!(return_path(None), "/cart");
        assert_eq!(return_path(Some("/catalog?category=Evening")), "/catalog?category=Evening");
        assert_eq!(return_path(Some("https://evil.example")), "/cart");
        assert_eq!(return_path(Some("//evil.example")), "/cart");
        assert_eq!(return_path(Some("/\\evil.example")), "/cart");
        assert_eq!(return_path(Some("")), "/cart");
    }
}
