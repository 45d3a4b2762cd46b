//! Aura Exotixx Core - Shared domain library.
//!
//! This crate provides the domain model used by the storefront:
//! - products, the site configuration record, and the session user
//! - the cart engine (merge-on-match, quantity clamping, derived totals)
//! - catalog filtering
//! - typed form requests and their validation
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! database access, no HTTP. Persistence lives in the storefront crate.
//!
//! # Modules
//!
//! - [`types`] - Domain records and newtype wrappers
//! - [`requests`] - Admin/contact form payloads and validation

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod requests;
pub mod types;

pub use requests::{
    ContactInquiry, ContactRequest, FieldError, ProductDraft, ProductRequest, SiteConfigRequest,
    ValidationError,
};
pub use types::*;
