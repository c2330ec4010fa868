//! Site-wide settings shared by every view.

use std::collections::HashMap;

use vitrina_catalog::Product;
use vitrina_core::{VitrinaConfig, assign_page_slugs, page_slug};

use crate::contact::ContactLink;

/// What views need to know about the site they are rendered into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Site name, used in detail page titles.
    pub site_name: String,
    /// Fallback image for empty galleries and broken loads.
    pub placeholder: String,
    /// Directory (relative to the listing page) holding detail pages.
    pub detail_dir: String,
    /// Contact link builder.
    pub contact: ContactLink,
    /// Detail page name per product id, once assigned for a catalog.
    pub page_slugs: HashMap<String, String>,
}

impl RenderContext {
    /// Context taken from the loaded configuration.
    pub fn from_config(config: &VitrinaConfig) -> Self {
        Self {
            site_name: config.site.name.clone(),
            placeholder: config.images.placeholder.clone(),
            detail_dir: config.site.detail_dir.trim_end_matches('/').to_string(),
            contact: ContactLink::from_config(&config.contact),
            page_slugs: HashMap::new(),
        }
    }

    /// Assign detail page names for every id in a catalog.
    ///
    /// Ids whose derived names collide get distinct, suffixed names
    /// (see [`assign_page_slugs`]).
    pub fn with_page_slugs<'a>(mut self, ids: impl IntoIterator<Item = &'a str>) -> Self {
        self.page_slugs = assign_page_slugs(ids);
        self
    }

    /// Name of a product's detail page, without extension.
    ///
    /// Uses the assigned name when there is one, and the plain derived name
    /// for ids outside the assigned catalog.
    pub fn page_slug(&self, product: &Product) -> Option<String> {
        match self.page_slugs.get(product.id()) {
            Some(slug) => Some(slug.clone()),
            None => page_slug(product.id()),
        }
    }

    /// Link from the listing page to a product's detail page.
    ///
    /// `None` when the id has no usable characters.
    pub fn detail_href(&self, product: &Product) -> Option<String> {
        let slug = self.page_slug(product)?;
        if self.detail_dir.is_empty() {
            Some(format!("{slug}.html"))
        } else {
            Some(format!("{}/{slug}.html", self.detail_dir))
        }
    }

    /// Document title of a detail page.
    pub fn detail_title(&self, product: &Product) -> String {
        format!("{} - {}", product.name(), self.site_name)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::from_config(&VitrinaConfig::default())
    }
}
