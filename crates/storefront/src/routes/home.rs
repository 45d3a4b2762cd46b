//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use aura_exotixx_core::{Product, SiteConfig, featured};
use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::middleware::RequireUser;
use crate::models::{Layout, nav};

/// Query parameters for the post-checkout notice.
#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    #[serde(default)]
    pub order: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: Layout,
    pub config: SiteConfig,
    pub featured: Vec<Product>,
    pub order_placed: bool,
}

/// Display the home page: hero, featured products and the about section.
#[instrument(skip_all)]
pub async fn home(
    RequireUser(store): RequireUser,
    Query(query): Query<HomeQuery>,
) -> impl IntoResponse {
    HomeTemplate {
        layout: Layout::new(&store, nav::HOME),
        config: store.config().clone(),
        featured: featured(store.products()).into_iter().cloned().collect(),
        order_placed: query.order.as_deref() == Some("placed"),
    }
}
