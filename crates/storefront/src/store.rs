//! The storefront state container.
//!
//! A [`Store`] holds the four persisted records for one request: the
//! product catalog, the site configuration, the visitor's cart and the
//! visitor's user. Loading never fails; a missing record yields its
//! default and an unreadable one yields its default plus a warning. Every
//! mutation writes the changed record back before returning, so a
//! redirect issued after a successful call always observes the new state.

use aura_exotixx_core::{
    Cart, CatalogFilter, Email, Price, Product, ProductDraft, ProductId, SiteConfig, User,
    categories, initial_products,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::storage::{KeyValueStore, StorageError, StorageKey};

/// A failed write-through.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Catalog, config, cart and user over a key-value backend.
#[derive(Debug)]
pub struct Store<K> {
    storage: K,
    products: Vec<Product>,
    config: SiteConfig,
    cart: Cart,
    user: Option<User>,
}

impl<K: KeyValueStore> Store<K> {
    /// Load every record from `storage`, falling back to defaults.
    pub async fn load(storage: K) -> Self {
        let products = load_or(&storage, StorageKey::Products, initial_products).await;
        let config = load_or(&storage, StorageKey::Config, SiteConfig::default).await;
        let cart = load_or(&storage, StorageKey::Cart, Cart::new).await;
        let user = load_or(&storage, StorageKey::User, || None).await;

        Self {
            storage,
            products,
            config,
            cart,
            user,
        }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    /// Products visible under `filter`, in catalog order.
    #[must_use]
    pub fn filtered(&self, filter: &CatalogFilter) -> Vec<&Product> {
        filter.apply(&self.products)
    }

    /// "All" plus each distinct category.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        categories(&self.products)
    }

    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.cart.total()
    }

    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    #[must_use]
    pub const fn storage(&self) -> &K {
        &self.storage
    }

    // -------------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------------

    /// Replace the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the catalog cannot be persisted.
    pub async fn update_products(&mut self, products: Vec<Product>) -> Result<(), StoreError> {
        self.products = products;
        self.persist(StorageKey::Products, &self.products).await
    }

    /// Append a new product built from `draft` and return its id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the catalog cannot be persisted.
    pub async fn create_product(&mut self, draft: ProductDraft) -> Result<ProductId, StoreError> {
        let id = ProductId::generate(chrono::Utc::now(), self.products.iter().map(|p| &p.id));
        let mut products = self.products.clone();
        products.push(draft.into_product(id.clone(), None));
        self.update_products(products).await?;
        Ok(id)
    }

    /// Overwrite product `id` with `draft`, keeping its position.
    ///
    /// Returns `false` when no such product exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the catalog cannot be persisted.
    pub async fn replace_product(
        &mut self,
        id: &ProductId,
        draft: ProductDraft,
    ) -> Result<bool, StoreError> {
        let mut products = self.products.clone();
        let Some(slot) = products.iter_mut().find(|p| p.id == *id) else {
            return Ok(false);
        };
        let current_image = slot.image_url.clone();
        *slot = draft.into_product(id.clone(), Some(&current_image));
        self.update_products(products).await?;
        Ok(true)
    }

    /// Remove product `id` from the catalog. Cart snapshots are untouched.
    ///
    /// Returns `false` when no such product exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the catalog cannot be persisted.
    pub async fn delete_product(&mut self, id: &ProductId) -> Result<bool, StoreError> {
        let before = self.products.len();
        let products: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.id != *id)
            .cloned()
            .collect();
        if products.len() == before {
            return Ok(false);
        }
        self.update_products(products).await?;
        Ok(true)
    }

    /// Replace the site configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the config cannot be persisted.
    pub async fn update_config(&mut self, config: SiteConfig) -> Result<(), StoreError> {
        self.config = config;
        self.persist(StorageKey::Config, &self.config).await
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    /// Add one unit of `product` in `size`, merging with an existing line.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart cannot be persisted.
    pub async fn add_to_cart(&mut self, product: &Product, size: &str) -> Result<(), StoreError> {
        self.cart.add(product, size);
        self.persist(StorageKey::Cart, &self.cart).await
    }

    /// Remove the line for (`id`, `size`). Absent lines are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart cannot be persisted.
    pub async fn remove_from_cart(&mut self, id: &ProductId, size: &str) -> Result<(), StoreError> {
        if self.cart.remove(id, size) {
            self.persist(StorageKey::Cart, &self.cart).await?;
        }
        Ok(())
    }

    /// Adjust the quantity of (`id`, `size`) by `delta`, never below 1.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart cannot be persisted.
    pub async fn update_quantity(
        &mut self,
        id: &ProductId,
        size: &str,
        delta: i64,
    ) -> Result<Option<u32>, StoreError> {
        let quantity = self.cart.update_quantity(id, size, delta);
        if quantity.is_some() {
            self.persist(StorageKey::Cart, &self.cart).await?;
        }
        Ok(quantity)
    }

    /// Empty the cart and delete its persisted record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cart record cannot be removed.
    pub async fn clear_cart(&mut self) -> Result<(), StoreError> {
        self.cart.clear();
        self.storage.remove(StorageKey::Cart).await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Session user
    // -------------------------------------------------------------------------

    /// Sign in as `email`. Admin status is derived from the address.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the user cannot be persisted.
    pub async fn login(&mut self, email: &Email) -> Result<&User, StoreError> {
        let user = User::for_email(email);
        self.persist(StorageKey::User, &user).await?;
        Ok(self.user.insert(user))
    }

    /// Sign out. The cart is kept.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the user record cannot be removed.
    pub async fn logout(&mut self) -> Result<(), StoreError> {
        self.user = None;
        self.storage.remove(StorageKey::User).await?;
        Ok(())
    }

    async fn persist<T: Serialize + Sync>(
        &self,
        key: StorageKey,
        value: &T,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        self.storage.set(key, json).await?;
        Ok(())
    }
}

/// Decode the record under `key`.
async fn read<K, T>(storage: &K, key: StorageKey) -> Result<Option<T>, StorageError>
where
    K: KeyValueStore,
    T: DeserializeOwned,
{
    let Some(raw) = storage.get(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StorageError::MalformedData { key, source })
}

/// Decode the record under `key`, or build the default.
async fn load_or<K, T>(storage: &K, key: StorageKey, default: impl FnOnce() -> T) -> T
where
    K: KeyValueStore,
    T: DeserializeOwned,
{
    match read(storage, key).await {
        Ok(Some(value)) => value,
        Ok(None) => default(),
        Err(e) => {
            tracing::warn!(key = %key, error = %e, "Unreadable record, using default");
            default()
        }
    }
}
