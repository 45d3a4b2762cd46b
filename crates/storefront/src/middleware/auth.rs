//! Store and authentication extractors.
//!
//! Each request loads its own [`Store`]: site-scope records come from
//! `SQLite`, visitor-scope records from the session. The gating extractors
//! wrap the same store and reject with a redirect.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::error::AppError;
use crate::state::AppState;
use crate::storage::{SessionStorage, SiteStorage, SplitStore};
use crate::store::Store;

/// The store type handlers work with.
pub type RequestStore = Store<SplitStore<SiteStorage, SessionStorage>>;

/// Extractor that loads the store without any gating.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(CurrentStore(store): CurrentStore) -> impl IntoResponse {
///     store.cart_count().to_string()
/// }
/// ```
pub struct CurrentStore(pub RequestStore);

impl FromRequestParts<AppState> for CurrentStore {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Get the session from extensions (set by SessionManagerLayer)
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer not installed".to_string()))?;

        let storage = SplitStore::new(state.site_storage().clone(), SessionStorage::new(session));
        Ok(Self(Store::load(storage).await))
    }
}

/// Rejection for the gating extractors.
pub enum AuthRejection {
    /// No user in the session.
    RedirectToLogin,
    /// A user is present but lacks admin rights.
    RedirectHome,
    /// The store could not be loaded.
    Failed(AppError),
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/login").into_response(),
            Self::RedirectHome => Redirect::to("/").into_response(),
            Self::Failed(err) => err.into_response(),
        }
    }
}

/// Extractor that requires a logged-in shopper.
///
/// Redirects to `/login` when the session has no user.
pub struct RequireUser(pub RequestStore);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentStore(store) = CurrentStore::from_request_parts(parts, state)
            .await
            .map_err(AuthRejection::Failed)?;

        if store.user().is_none() {
            return Err(AuthRejection::RedirectToLogin);
        }

        Ok(Self(store))
    }
}

/// Extractor that requires the admin user.
///
/// Redirects to `/login` without a user and to `/` for non-admins.
pub struct RequireAdmin(pub RequestStore);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireUser(store) = RequireUser::from_request_parts(parts, state).await?;

        if !store.is_admin() {
            tracing::warn!(path = %parts.uri.path(), "Non-admin request to admin console");
            return Err(AuthRejection::RedirectHome);
        }

        Ok(Self(store))
    }
}
