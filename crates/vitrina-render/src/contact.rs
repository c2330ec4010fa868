//! Outbound WhatsApp contact link.

use vitrina_catalog::Product;
use vitrina_core::ContactConfig;

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Builds the "ask about this product" link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLink {
    phone: String,
    greeting: String,
    label: String,
}

impl ContactLink {
    /// Link settings from the `[contact]` config section.
    pub fn from_config(config: &ContactConfig) -> Self {
        Self {
            phone: config.phone.clone(),
            greeting: config.greeting.clone(),
            label: config.label.clone(),
        }
    }

    /// Message text, e.g. `Hola! Me interesa el producto: Serum (Nivea) - ₡8500`.
    pub fn message(&self, product: &Product) -> String {
        format!(
            "{} {} ({}) - {}",
            self.greeting,
            product.name(),
            product.brand(),
            product.price()
        )
    }

    /// Full link with the percent-encoded message.
    pub fn url(&self, product: &Product) -> String {
        format!(
            "{WHATSAPP_BASE}{}?text={}",
            self.phone,
            urlencoding::encode(&self.message(product))
        )
    }

    /// Button label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Default for ContactLink {
    fn default() -> Self {
        Self::from_config(&ContactConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrina_catalog::Catalog;

    fn product() -> Product {
        let catalog = Catalog::from_csv(
            "ID,Product Name,Brand,Selling Price CRC\n1,Hydra Serum,Nivea & Co,₡8 500",
        );
        catalog.products()[0].clone()
    }

    #[test]
    fn test_message() {
        let link = ContactLink::default();
        assert_eq!(
            link.message(&product()),
            "Hola! Me interesa el producto: Hydra Serum (Nivea & Co) - ₡8 500"
        );
    }

    #[test]
    fn test_url_is_percent_encoded() {
        let url = ContactLink::default().url(&product());
        assert!(url.starts_with("https://wa.me/50670935053?text=Hola%21%20Me%20interesa"));
        assert!(url.contains("Nivea%20%26%20Co"));
        assert!(url.contains("%E2%82%A1"));
        assert!(!url.contains(' '));
        assert!(!url["https://wa.me/50670935053?text=".len()..].contains('&'));
    }

    #[test]
    fn test_custom_phone() {
        let config = ContactConfig {
            phone: "15550001111".to_string(),
            ..ContactConfig::default()
        };
        let url = ContactLink::from_config(&config).url(&product());
        assert!(url.starts_with("https://wa.me/15550001111?text="));
    }
}
