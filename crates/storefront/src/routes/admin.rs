//! Admin console route handlers.
//!
//! Every handler requires the admin user. Product edits replace the whole
//! catalog record; the site form replaces the whole configuration record.
//! Invalid submissions re-render the form with 422 and per-field messages.

use askama::Template;
use askama_web::WebTemplate;
use aura_exotixx_core::{Product, ProductId, ProductRequest, SiteConfigRequest, ValidationError};
use axum::{
    Form,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{RequestStore, RequireAdmin};
use crate::models::{Layout, nav};

/// Console tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Products,
    Site,
}

/// Query parameters for the console.
#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    #[serde(default)]
    pub tab: AdminTab,
    /// Set after a successful save.
    #[serde(default)]
    pub saved: Option<String>,
}

/// Console template: product inventory or site settings.
#[derive(Template, WebTemplate)]
#[template(path = "admin/index.html")]
pub struct AdminTemplate {
    pub layout: Layout,
    pub products_tab: bool,
    pub products: Vec<Product>,
    pub config_form: SiteConfigRequest,
    pub errors: ValidationError,
    pub saved: bool,
}

/// Product create/edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/product_form.html")]
pub struct ProductFormTemplate {
    pub layout: Layout,
    pub title: &'static str,
    pub action: String,
    pub form: ProductRequest,
    pub errors: ValidationError,
    /// Image kept when the URL field is left blank on edit.
    pub current_image: Option<String>,
}

impl AdminTemplate {
    fn new(store: &RequestStore, tab: AdminTab) -> Self {
        Self {
            layout: Layout::new(store, nav::ADMIN),
            products_tab: tab == AdminTab::Products,
            products: store.products().to_vec(),
            config_form: SiteConfigRequest::from_config(store.config()),
            errors: ValidationError::default(),
            saved: false,
        }
    }
}

impl ProductFormTemplate {
    fn create(store: &RequestStore, form: ProductRequest, errors: ValidationError) -> Self {
        Self {
            layout: Layout::new(store, nav::ADMIN),
            title: "New Entry",
            action: "/admin/products".to_string(),
            form,
            errors,
            current_image: None,
        }
    }

    fn edit(
        store: &RequestStore,
        product: &Product,
        form: ProductRequest,
        errors: ValidationError,
    ) -> Self {
        Self {
            layout: Layout::new(store, nav::ADMIN),
            title: "Edit Entry",
            action: format!("/admin/products/{}", product.id),
            form,
            errors,
            current_image: Some(product.image_url.clone()),
        }
    }
}

// =============================================================================
// Console
// =============================================================================

/// Display the console.
///
/// GET /admin?tab=products|site
#[instrument(skip(store))]
pub async fn index(
    RequireAdmin(store): RequireAdmin,
    Query(query): Query<AdminQuery>,
) -> impl IntoResponse {
    AdminTemplate {
        saved: query.saved.is_some(),
        ..AdminTemplate::new(&store, query.tab)
    }
}

/// Replace the site configuration.
///
/// POST /admin/config
#[instrument(skip_all)]
pub async fn update_config(
    RequireAdmin(mut store): RequireAdmin,
    Form(form): Form<SiteConfigRequest>,
) -> Result<Response> {
    match form.validate(store.config()) {
        Ok(config) => {
            store.update_config(config).await?;
            tracing::info!("Site configuration updated");
            Ok(Redirect::to("/admin?tab=site&saved=1").into_response())
        }
        Err(errors) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            AdminTemplate {
                config_form: form,
                errors,
                ..AdminTemplate::new(&store, AdminTab::Site)
            },
        )
            .into_response()),
    }
}

// =============================================================================
// Products
// =============================================================================

/// Blank product form.
///
/// GET /admin/products/new
#[instrument(skip_all)]
pub async fn new_product(RequireAdmin(store): RequireAdmin) -> impl IntoResponse {
    ProductFormTemplate::create(&store, ProductRequest::default(), ValidationError::default())
}

/// Append a product.
///
/// POST /admin/products
#[instrument(skip_all)]
pub async fn create_product(
    RequireAdmin(mut store): RequireAdmin,
    Form(form): Form<ProductRequest>,
) -> Result<Response> {
    match form.validate() {
        Ok(draft) => {
            let id = store.create_product(draft).await?;
            tracing::info!(product_id = %id, "Product created");
            Ok(Redirect::to("/admin?tab=products&saved=1").into_response())
        }
        Err(errors) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            ProductFormTemplate::create(&store, form, errors),
        )
            .into_response()),
    }
}

/// Pre-filled form for an existing product.
///
/// GET /admin/products/{id}/edit
#[instrument(skip(store))]
pub async fn edit_product(
    RequireAdmin(store): RequireAdmin,
    Path(id): Path<String>,
) -> Result<ProductFormTemplate> {
    let product = find(&store, &ProductId::new(id))?;
    Ok(ProductFormTemplate::edit(
        &store,
        &product,
        ProductRequest::from_product(&product),
        ValidationError::default(),
    ))
}

/// Overwrite a product in place.
///
/// POST /admin/products/{id}
#[instrument(skip(store, form))]
pub async fn update_product(
    RequireAdmin(mut store): RequireAdmin,
    Path(id): Path<String>,
    Form(form): Form<ProductRequest>,
) -> Result<Response> {
    let product = find(&store, &ProductId::new(id))?;
    match form.validate() {
        Ok(draft) => {
            store.replace_product(&product.id, draft).await?;
            tracing::info!(product_id = %product.id, "Product updated");
            Ok(Redirect::to("/admin?tab=products&saved=1").into_response())
        }
        Err(errors) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            ProductFormTemplate::edit(&store, &product, form, errors),
        )
            .into_response()),
    }
}

/// Remove a product. Bags holding it keep their snapshot.
///
/// POST /admin/products/{id}/delete
#[instrument(skip(store))]
pub async fn delete_product(
    RequireAdmin(mut store): RequireAdmin,
    Path(id): Path<String>,
) -> Result<Redirect> {
    let id = ProductId::new(id);
    if !store.delete_product(&id).await? {
        return Err(AppError::NotFound(format!("product {id}")));
    }
    tracing::info!(product_id = %id, "Product deleted");
    Ok(Redirect::to("/admin?tab=products&saved=1"))
}

fn find(store: &RequestStore, id: &ProductId) -> Result<Product> {
    store
        .product(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}
