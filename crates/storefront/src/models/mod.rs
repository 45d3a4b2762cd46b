//! View models shared by page templates.

use crate::storage::KeyValueStore;
use crate::store::Store;

/// Navigation entries; the active one is highlighted.
pub mod nav {
    pub const HOME: &str = "home";
    pub const CATALOG: &str = "catalog";
    pub const CONTACT: &str = "contact";
    pub const ADMIN: &str = "admin";
    pub const CART: &str = "cart";
}

/// Page chrome rendered by `base.html`: banner, navigation, bag badge and
/// footer.
#[derive(Debug, Clone)]
pub struct Layout {
    pub active: &'static str,
    /// Announcement text, present only while the banner is switched on.
    pub banner: Option<String>,
    /// "Authority Console" or "Guest Account"; the email is never shown.
    pub account_label: &'static str,
    pub is_admin: bool,
    pub cart_count: u32,
    pub about_text: String,
    pub contact_email: String,
    pub contact_phone: String,
}

impl Layout {
    #[must_use]
    pub fn new<K: KeyValueStore>(store: &Store<K>, active: &'static str) -> Self {
        let config = store.config();
        Self {
            active,
            banner: config
                .show_banner
                .then(|| config.banner_message.clone())
                .filter(|m| !m.is_empty()),
            account_label: store.user().map_or("Guest Account", |u| u.display_name()),
            is_admin: store.is_admin(),
            cart_count: store.cart_count(),
            about_text: config.about_text.clone(),
            contact_email: config.contact_email.clone(),
            contact_phone: config.contact_phone.clone(),
        }
    }
}
