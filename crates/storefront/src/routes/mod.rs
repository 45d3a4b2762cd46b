//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                       - Liveness check
//! GET  /health/ready                 - Readiness check (database)
//!
//! # Session
//! GET  /login                        - Login page
//! POST /login                        - Sign in with an email
//! POST /logout                       - Sign out (bag is kept)
//!
//! # Shop (requires a user)
//! GET  /                             - Home page
//! GET  /catalog?category=&q=         - Filtered catalog
//! GET  /catalog/{id}                 - Product detail
//! GET  /cart                         - Bag
//! POST /cart/add                     - Add one unit
//! POST /cart/update                  - Step quantity (floor 1)
//! POST /cart/remove                  - Remove line
//! GET  /payment?method=              - Payment page
//! POST /payment                      - Place order (empties bag)
//! GET  /contact                      - Contact page
//! POST /contact                      - Send inquiry
//!
//! # Admin console (requires the admin user)
//! GET  /admin?tab=products|site      - Console
//! POST /admin/config                 - Replace site configuration
//! GET  /admin/products/new           - New product form
//! POST /admin/products               - Create product
//! GET  /admin/products/{id}/edit     - Edit product form
//! POST /admin/products/{id}          - Update product
//! POST /admin/products/{id}/delete   - Delete product
//!
//! Anything else redirects to /.
//! ```

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod contact;
pub mod home;
pub mod payment;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/{id}", get(catalog::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
}

/// Create the admin console routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::index))
        .route("/config", post(admin::update_config))
        .route("/products", post(admin::create_product))
        .route("/products/new", get(admin::new_product))
        .route("/products/{id}", post(admin::update_product))
        .route("/products/{id}/edit", get(admin::edit_product))
        .route("/products/{id}/delete", post(admin::delete_product))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/", get(home::home))
        .nest("/catalog", catalog_routes())
        .nest("/cart", cart_routes())
        .route("/payment", get(payment::show).post(payment::place_order))
        .route("/contact", get(contact::show).post(contact::submit))
        .nest("/admin", admin_routes())
        .fallback(|| async { Redirect::to("/") })
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
