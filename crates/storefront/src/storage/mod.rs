//! Key-value persistence for storefront state.
//!
//! Four records are persisted as JSON text under fixed keys:
//!
//! | Key                      | Record            | Scope   |
//! |--------------------------|-------------------|---------|
//! | `aura_exotixx_products`  | product catalog   | site    |
//! | `aura_exotixx_config`    | site config       | site    |
//! | `aura_exotixx_cart`      | cart items        | visitor |
//! | `aura_exotixx_user`      | session user      | visitor |
//!
//! Site-scope records are shared by every visitor and live in `SQLite`.
//! Visitor-scope records live in the visitor's server-side session.
//! [`SplitStore`] routes each key to the right backend.

#[cfg(test)]
pub mod memory;
pub mod session;
pub mod split;
pub mod sqlite;

use std::fmt;
use std::future::Future;

use thiserror::Error;

#[cfg(test)]
pub use memory::MemoryStore;
pub use session::SessionStorage;
pub use split::SplitStore;
pub use sqlite::SiteStorage;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Who a persisted record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Shared by every visitor.
    Site,
    /// Private to one browser session.
    Visitor,
}

/// The fixed storage keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Products,
    Config,
    Cart,
    User,
}

impl StorageKey {
    /// Every key, in load order.
    pub const ALL: [Self; 4] = [Self::Products, Self::Config, Self::Cart, Self::User];

    /// The persisted key name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Products => "aura_exotixx_products",
            Self::Config => "aura_exotixx_config",
            Self::Cart => "aura_exotixx_cart",
            Self::User => "aura_exotixx_user",
        }
    }

    #[must_use]
    pub const fn scope(self) -> Scope {
        match self {
            Self::Products | Self::Config => Scope::Site,
            Self::Cart | Self::User => Scope::Visitor,
        }
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage backend failures.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not be read or written.
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] BoxError),

    /// A persisted value is not valid JSON for its record type.
    #[error("malformed data under {key}: {source}")]
    MalformedData {
        key: StorageKey,
        #[source]
        source: serde_json::Error,
    },
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Unavailable(Box::new(err))
    }
}

impl From<tower_sessions::session::Error> for StorageError {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self::Unavailable(Box::new(err))
    }
}

/// A string-keyed, string-valued persistent map.
///
/// Values are opaque JSON text; encoding and decoding happen in
/// [`crate::store::Store`].
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value under `key`, `None` when absent.
    fn get(
        &self,
        key: StorageKey,
    ) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Replace the value under `key`.
    fn set(
        &self,
        key: StorageKey,
        value: String,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Delete the value under `key`. Removing an absent key is not an error.
    fn remove(&self, key: StorageKey) -> impl Future<Output = Result<(), StorageError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        let names: Vec<&str> = StorageKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "aura_exotixx_products",
                "aura_exotixx_config",
                "aura_exotixx_cart",
                "aura_exotixx_user"
            ]
        );
    }

    #[test]
    fn test_key_scopes() {
        assert_eq!(StorageKey::Products.scope(), Scope::Site);
        assert_eq!(StorageKey::Config.scope(), Scope::Site);
        assert_eq!(StorageKey::Cart.scope(), Scope::Visitor);
        assert_eq!(StorageKey::User.scope(), Scope::Visitor);
    }

    #[test]
    fn test_malformed_error_names_key() {
        let source = serde_json::from_str::<u8>("{").unwrap_err();
        let err = StorageError::MalformedData {
            key: StorageKey::Cart,
            source,
        };
        assert!(err.to_string().starts_with("malformed data under aura_exotixx_cart"));
    }
}
