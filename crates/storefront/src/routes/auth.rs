//! Login and logout route handlers.
//!
//! Login is email-only: any well-formed address signs in, and the admin
//! address unlocks the admin console. No password or credential is checked.

use askama::Template;
use askama_web::WebTemplate;
use aura_exotixx_core::Email;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::CurrentStore;

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub email: String,
}

/// Display the login page, or go home when already signed in.
#[instrument(skip_all)]
pub async fn login_page(CurrentStore(store): CurrentStore) -> Response {
    if store.user().is_some() {
        return Redirect::to("/").into_response();
    }

    LoginTemplate {
        error: None,
        email: String::new(),
    }
    .into_response()
}

/// Sign in with an email address.
///
/// POST /login
#[instrument(skip_all)]
pub async fn login(
    CurrentStore(mut store): CurrentStore,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let email = match Email::parse(&form.email) {
        Ok(email) => email,
        Err(e) => {
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                LoginTemplate {
                    error: Some(e.to_string()),
                    email: form.email,
                },
            )
                .into_response());
        }
    };

    let user = store.login(&email).await?;
    set_sentry_user(&user.email, user.is_admin);
    tracing::info!(admin = user.is_admin, "User signed in");

    Ok(Redirect::to("/").into_response())
}

/// Sign out. The bag is kept.
///
/// POST /logout
#[instrument(skip_all)]
pub async fn logout(CurrentStore(mut store): CurrentStore) -> Result<Redirect> {
    store.logout().await?;
    clear_sentry_user();
    tracing::info!("User signed out");
    Ok(Redirect::to("/login"))
}
