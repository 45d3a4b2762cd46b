//! Checkout route handlers.
//!
//! Payment is simulated: placing the order logs it, empties the bag and
//! returns the shopper to the home page. No payment details are collected.

use askama::Template;
use askama_web::WebTemplate;
use aura_exotixx_core::{CartItem, Price};
use axum::{
    Form,
    extract::Query,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireUser;
use crate::models::{Layout, nav};

/// How the shopper intends to pay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Upi,
    Card,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [Self; 3] = [Self::Upi, Self::Card, Self::Cash];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upi => "upi",
            Self::Card => "card",
            Self::Cash => "cash",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upi => "UPI Transfer",
            Self::Card => "Card Payment",
            Self::Cash => "Cash On Delivery",
        }
    }
}

/// A payment method tab.
#[derive(Debug, Clone)]
pub struct MethodOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Query parameters selecting the method tab.
#[derive(Debug, Default, Deserialize)]
pub struct PaymentQuery {
    #[serde(default)]
    pub method: PaymentMethod,
}

/// Place-order form data.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceOrderForm {
    #[serde(default)]
    pub method: PaymentMethod,
}

/// Payment page template.
#[derive(Template, WebTemplate)]
#[template(path = "payment.html")]
pub struct PaymentTemplate {
    pub layout: Layout,
    pub items: Vec<CartItem>,
    pub total: Price,
    pub upi_id: String,
    pub methods: Vec<MethodOption>,
    pub method: &'static str,
}

/// Display the payment page. An empty bag redirects to the catalog.
///
/// GET /payment?method=upi|card|cash
#[instrument(skip(store))]
pub async fn show(
    RequireUser(store): RequireUser,
    Query(query): Query<PaymentQuery>,
) -> Response {
    if store.cart().is_empty() {
        return Redirect::to("/catalog").into_response();
    }

    PaymentTemplate {
        layout: Layout::new(&store, nav::CART),
        items: store.cart().items().to_vec(),
        total: store.cart_total(),
        upi_id: store.config().upi_id.clone(),
        methods: PaymentMethod::ALL
            .into_iter()
            .map(|m| MethodOption {
                value: m.as_str(),
                label: m.label(),
                selected: m == query.method,
            })
            .collect(),
        method: query.method.as_str(),
    }
    .into_response()
}

/// Place the order: log it, empty the bag, go home.
///
/// POST /payment
#[instrument(skip(store))]
pub async fn place_order(
    RequireUser(mut store): RequireUser,
    Form(form): Form<PlaceOrderForm>,
) -> Result<Redirect> {
    if store.cart().is_empty() {
        return Ok(Redirect::to("/catalog"));
    }

    let total = store.cart_total();
    let items = store.cart().items().len();
    let units = store.cart_count();
    store.clear_cart().await?;

    add_breadcrumb("checkout", "Order placed", Some(&[("method", form.method.as_str())]));
    tracing::info!(
        method = form.method.as_str(),
        total = total.amount(),
        items,
        units,
        "Order placed"
    );

    Ok(Redirect::to("/?order=placed"))
}
