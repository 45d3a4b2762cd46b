//! Contact page route handlers.
//!
//! Inquiries are validated and logged; there is no outbound delivery.

use askama::Template;
use askama_web::WebTemplate;
use aura_exotixx_core::{ContactRequest, ValidationError};
use axum::{
    Form,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::middleware::RequireUser;
use crate::models::{Layout, nav};

/// Query parameters for the confirmation notice.
#[derive(Debug, Default, Deserialize)]
pub struct ContactQuery {
    #[serde(default)]
    pub sent: Option<String>,
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: Layout,
    pub form: ContactRequest,
    pub errors: ValidationError,
    pub sent: bool,
}

/// Display the contact page.
#[instrument(skip_all)]
pub async fn show(
    RequireUser(store): RequireUser,
    Query(query): Query<ContactQuery>,
) -> impl IntoResponse {
    ContactTemplate {
        layout: Layout::new(&store, nav::CONTACT),
        form: ContactRequest::default(),
        errors: ValidationError::default(),
        sent: query.sent.is_some(),
    }
}

/// Accept an inquiry.
///
/// POST /contact
#[instrument(skip_all)]
pub async fn submit(RequireUser(store): RequireUser, Form(form): Form<ContactRequest>) -> Response {
    match form.validate() {
        Ok(inquiry) => {
            tracing::info!(
                email = %inquiry.email,
                name = %inquiry.name,
                message_len = inquiry.message.len(),
                "Contact inquiry received"
            );
            Redirect::to("/contact?sent=1").into_response()
        }
        Err(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactTemplate {
                layout: Layout::new(&store, nav::CONTACT),
                form,
                errors,
                sent: false,
            },
        )
            .into_response(),
    }
}
