//! Typed form requests.
//!
//! Each admin or contact form deserializes into one of these structs (field
//! names match the HTML inputs) and is validated before anything is merged
//! into a domain record. Validation collects every failing field so the form
//! can be re-rendered with messages next to the inputs.

use core::fmt;

use serde::Deserialize;

use crate::types::{Email, Price, Product, ProductId, SiteConfig};

/// A single rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field name.
    pub field: &'static str,
    /// Human-readable message.
    pub message: String,
}

/// All rejected inputs of one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// The message for `field`, if it was rejected.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "invalid form: {}", parts.join("; "))
    }
}

impl std::error::Error for ValidationError {}

/// Trim `value` and record an error when nothing is left.
fn required(errors: &mut ValidationError, field: &'static str, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, "This field is required.");
    }
    trimmed.to_owned()
}

/// HTML checkboxes post "on" when ticked and nothing otherwise.
fn checked(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty() && v != "off")
}

// =============================================================================
// Products
// =============================================================================

/// Admin product form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Comma-separated size labels ("XS, S, M").
    #[serde(default)]
    pub sizes: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub is_sold_out: Option<String>,
}

/// A validated product form, not yet bound to an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub price: Price,
    pub description: String,
    pub category: String,
    pub sizes: Vec<String>,
    /// `None` keeps the current image when editing.
    pub image_url: Option<String>,
    pub is_sold_out: bool,
}

impl ProductRequest {
    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns every failing field: name, description, category and sizes
    /// are required, price must be a non-negative whole number, and at least
    /// one non-empty size label must remain after splitting on commas.
    pub fn validate(&self) -> Result<ProductDraft, ValidationError> {
        let mut errors = ValidationError::default();

        let name = required(&mut errors, "name", &self.name);
        let description = required(&mut errors, "description", &self.description);
        let category = required(&mut errors, "category", &self.category);

        let price = match self.price.trim() {
            "" => {
                errors.push("price", "This field is required.");
                Price::ZERO
            }
            raw => raw.parse::<u64>().map(Price::new).unwrap_or_else(|_| {
                errors.push("price", "Price must be a whole number.");
                Price::ZERO
            }),
        };

        let sizes: Vec<String> = self
            .sizes
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        if sizes.is_empty() {
            errors.push("sizes", "Enter at least one size.");
        }

        let image_url = Some(self.image_url.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        errors.into_result(ProductDraft {
            name,
            price,
            description,
            category,
            sizes,
            image_url,
            is_sold_out: checked(self.is_sold_out.as_deref()),
        })
    }

    /// Pre-filled form for editing `product`.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.amount().to_string(),
            description: product.description.clone(),
            category: product.category.clone(),
            sizes: product.sizes_label(),
            image_url: product.image_url.clone(),
            is_sold_out: product.is_sold_out.then(|| "on".to_string()),
        }
    }

    /// Whether the sold-out box should render ticked.
    #[must_use]
    pub fn sold_out_checked(&self) -> bool {
        checked(self.is_sold_out.as_deref())
    }
}

impl ProductDraft {
    /// Bind the draft to `id`. A missing image falls back to `current_image`.
    #[must_use]
    pub fn into_product(self, id: ProductId, current_image: Option<&str>) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            description: self.description,
            sizes: self.sizes,
            image_url: self
                .image_url
                .or_else(|| current_image.map(str::to_owned))
                .unwrap_or_default(),
            is_sold_out: self.is_sold_out,
            category: self.category,
        }
    }
}

// =============================================================================
// Site configuration
// =============================================================================

/// Admin site-configuration form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfigRequest {
    #[serde(default)]
    pub hero_title: String,
    #[serde(default)]
    pub hero_subtitle: String,
    #[serde(default)]
    pub hero_image_url: String,
    #[serde(default)]
    pub banner_message: String,
    #[serde(default)]
    pub show_banner: Option<String>,
    #[serde(default)]
    pub about_text: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub contact_phone: String,
    #[serde(default)]
    pub upi_id: String,
}

impl SiteConfigRequest {
    /// Validate the form into a full replacement record.
    ///
    /// An empty hero image keeps `current`'s image.
    ///
    /// # Errors
    ///
    /// Returns every failing field: hero title and UPI id are required, the
    /// contact email must be a valid address, and the banner message is
    /// required while the banner is shown.
    pub fn validate(&self, current: &SiteConfig) -> Result<SiteConfig, ValidationError> {
        let mut errors = ValidationError::default();

        let hero_title = required(&mut errors, "hero_title", &self.hero_title);
        let upi_id = required(&mut errors, "upi_id", &self.upi_id);
        let show_banner = checked(self.show_banner.as_deref());
        let banner_message = self.banner_message.trim().to_owned();
        if show_banner && banner_message.is_empty() {
            errors.push("banner_message", "A visible banner needs a message.");
        }

        let contact_email = match Email::parse(&self.contact_email) {
            Ok(email) => email.into_inner(),
            Err(e) => {
                errors.push("contact_email", e.to_string());
                String::new()
            }
        };

        let hero_image_url = match self.hero_image_url.trim() {
            "" => current.hero_image_url.clone(),
            url => url.to_owned(),
        };

        errors.into_result(SiteConfig {
            hero_title,
            hero_subtitle: self.hero_subtitle.trim().to_owned(),
            hero_image_url,
            banner_message,
            show_banner,
            about_text: self.about_text.trim().to_owned(),
            contact_email,
            contact_phone: self.contact_phone.trim().to_owned(),
            upi_id,
        })
    }

    /// Pre-filled form for `config`.
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            hero_title: config.hero_title.clone(),
            hero_subtitle: config.hero_subtitle.clone(),
            hero_image_url: config.hero_image_url.clone(),
            banner_message: config.banner_message.clone(),
            show_banner: config.show_banner.then(|| "on".to_string()),
            about_text: config.about_text.clone(),
            contact_email: config.contact_email.clone(),
            contact_phone: config.contact_phone.clone(),
            upi_id: config.upi_id.clone(),
        }
    }

    /// Whether the show-banner box should render ticked.
    #[must_use]
    pub fn banner_checked(&self) -> bool {
        checked(self.show_banner.as_deref())
    }
}

// =============================================================================
// Contact inquiry
// =============================================================================

/// Contact page inquiry form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A validated inquiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInquiry {
    pub name: String,
    pub email: Email,
    pub message: String,
}

impl ContactRequest {
    /// Validate the inquiry.
    ///
    /// # Errors
    ///
    /// Returns failing fields: the email must be valid and the message
    /// non-empty. Names are optional.
    pub fn validate(&self) -> Result<ContactInquiry, ValidationError> {
        let mut errors = ValidationError::default();
        let message = required(&mut errors, "message", &self.message);
        let email = Email::parse(&self.email).map_err(|e| e.to_string());

        match email {
            Ok(email) => errors.into_result(ContactInquiry {
                name: format!("{} {}", self.first_name.trim(), self.last_name.trim())
                    .trim()
                    .to_owned(),
                email,
                message,
            }),
            Err(msg) => {
                errors.push("email", msg);
                Err(errors)
            }
        }
    }
}
