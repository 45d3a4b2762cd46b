//! Site configuration record.

use serde::{Deserialize, Serialize};

/// The singleton record of marketing/contact text and the payment
/// collection identifier. Replaced wholesale by the admin console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image_url: String,
    pub banner_message: String,
    pub show_banner: bool,
    pub about_text: String,
    pub contact_email: String,
    pub contact_phone: String,
    /// UPI id payments are collected on.
    pub upi_id: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hero_title: "Elegance Redefined".to_string(),
            hero_subtitle: "Discover the Aura of Exotic Fashion".to_string(),
            hero_image_url:
                "https://images.unsplash.com/photo-1490481651871-ab68de25d43d?q=80&w=2000"
                    .to_string(),
            banner_message: "NEW SEASON COLLECTION IS HERE - 15% OFF YOUR FIRST ORDER!"
                .to_string(),
            show_banner: true,
            about_text: "Aura Exotixx represents the pinnacle of feminine grace and modern \
                         sophistication. We curate dresses that tell a story of confidence \
                         and timeless beauty."
                .to_string(),
            contact_email: "shauryave1717@gmail.com".to_string(),
            contact_phone: "9099090334".to_string(),
            upi_id: "9099090334@fam".to_string(),
        }
    }
}
