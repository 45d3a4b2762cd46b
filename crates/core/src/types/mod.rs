//! Core types for Aura Exotixx.
//!
//! This module provides the domain records and type-safe wrappers.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod email;
pub mod id;
pub mod price;
pub mod product;
pub mod user;

pub use cart::{Cart, CartItem};
pub use catalog::{ALL_CATEGORIES, CatalogFilter, categories, featured};
pub use config::SiteConfig;
pub use email::{Email, EmailError};
pub use id::ProductId;
pub use price::Price;
pub use product::{Product, initial_products};
pub use user::{ADMIN_EMAIL, User};
