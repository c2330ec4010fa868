//! Listing page controller.

use std::collections::HashMap;

use futures::future::join_all;
use vitrina_catalog::{Catalog, FilterParams, Product};
use vitrina_core::{AssetFetcher, VitrinaConfig};
use vitrina_images::{Gallery, ImageResolver, create_resolver};
use vitrina_render::html::Document;
use vitrina_render::{Element, FilterBar, Panel, RenderContext, render_card, render_listing};

use super::{listing_error_panel, load_catalog};

/// State of one listing page load.
pub struct ListingPage {
    catalog: Catalog,
    resolver: Box<dyn ImageResolver>,
    ctx: RenderContext,
    categories: Vec<String>,
    brands: Vec<String>,
    params: FilterParams,
    galleries: HashMap<String, Gallery>,
}

impl ListingPage {
    /// Load the catalog and image resolver described by `config`.
    ///
    /// A catalog that cannot be fetched yields the load-error panel.
    pub async fn load(config: &VitrinaConfig, fetcher: &AssetFetcher) -> Result<Self, Panel> {
        let catalog = match load_catalog(fetcher, &config.catalog.source).await {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Failed to load catalog: {e}");
                return Err(listing_error_panel(&config.catalog.source));
            }
        };
        let resolver = create_resolver(&config.images, fetcher).await;
        Ok(Self::new(catalog, resolver, RenderContext::from_config(config)))
    }

    /// Controller over an already loaded catalog.
    ///
    /// Page names are assigned here once, so card links and the pages
    /// written for them always agree.
    pub fn new(catalog: Catalog, resolver: Box<dyn ImageResolver>, ctx: RenderContext) -> Self {
        let ctx = ctx.with_page_slugs(catalog.iter().map(Product::id));
        let categories = catalog.categories();
        let brands = catalog.brands();
        log::debug!(
            "Listing page: {} products, {} categories, {} brands, {} resolver",
            catalog.len(),
            categories.len(),
            brands.len(),
            resolver.name()
        );
        Self {
            catalog,
            resolver,
            ctx,
            categories,
            brands,
            params: FilterParams::default(),
            galleries: HashMap::new(),
        }
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Render settings in use.
    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    /// Category dropdown options.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Brand dropdown options.
    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// Current filter state.
    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    /// Replace the whole filter state.
    pub fn set_filter(&mut self, params: FilterParams) {
        self.params = params;
    }

    /// Update the search term.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.params.search = search.into();
    }

    /// Update the category filter (`""` clears it).
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.params.category = category.into();
    }

    /// Update the brand filter (`""` clears it).
    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.params.brand = brand.into();
    }

    /// Products passing the current filters, in file order.
    pub fn visible(&self) -> Vec<&Product> {
        self.catalog.filter(&self.params)
    }

    /// Number of galleries resolved so far.
    pub fn cached_galleries(&self) -> usize {
        self.galleries.len()
    }

    /// Gallery for one product id, resolving it on first use.
    pub async fn gallery(&mut self, id: &str) -> &Gallery {
        let gallery = match self.galleries.remove(id) {
            Some(cached) => cached,
            None => self.resolver.resolve(id).await,
        };
        self.galleries.entry(id.to_string()).or_insert(gallery)
    }

    /// Resolve every listed id not yet in the cache, concurrently.
    async fn resolve_missing(&mut self, ids: &[String]) {
        let mut missing: Vec<&String> = ids
            .iter()
            .filter(|id| !self.galleries.contains_key(id.as_str()))
            .collect();
        missing.sort();
        missing.dedup();
        if missing.is_empty() {
            return;
        }

        let resolver = &self.resolver;
        let resolved = join_all(missing.iter().map(|id| resolver.resolve(id))).await;
        for (id, gallery) in missing.into_iter().zip(resolved) {
            self.galleries.insert(id.clone(), gallery);
        }
    }

    /// Cards for the products passing the current filters.
    pub async fn render_cards(&mut self) -> Vec<Element> {
        let ids: Vec<String> = self.visible().iter().map(|p| p.id().to_string()).collect();
        self.resolve_missing(&ids).await;

        let fallback = Gallery::placeholder(&self.ctx.placeholder);
        self.catalog
            .filter(&self.params)
            .into_iter()
            .map(|p| {
                let gallery = self.galleries.get(p.id()).unwrap_or(&fallback);
                render_card(p, gallery, &self.ctx)
            })
            .collect()
    }

    /// Full listing body: filter bar and grid (or the no-results panel).
    pub async fn render(&mut self) -> Element {
        let cards = self.render_cards().await;
        let bar = FilterBar {
            categories: &self.categories,
            brands: &self.brands,
            params: &self.params,
        };
        render_listing(&bar, cards)
    }

    /// Listing wrapped in a complete page.
    pub async fn document(&mut self) -> Document {
        let title = self.ctx.site_name.clone();
        let body = self.render().await;
        Document::new(title, body)
    }

    /// Hand over the resolved galleries, e.g. to reuse them for detail pages.
    pub fn into_parts(self) -> (Catalog, HashMap<String, Gallery>, RenderContext) {
        (self.catalog, self.galleries, self.ctx)
    }
}

impl std::fmt::Debug for ListingPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingPage")
            .field("products", &self.catalog.len())
            .field("resolver", &self.resolver.name())
            .field("params", &self.params)
            .field("cached_galleries", &self.galleries.len())
            .finish()
    }
}
