//! Detail page controller.

use vitrina_catalog::{Catalog, Product};
use vitrina_core::{AssetFetcher, Error, VitrinaConfig};
use vitrina_images::{Gallery, ImageResolver, create_resolver};
use vitrina_render::html::Document;
use vitrina_render::{Element, Panel, RenderContext, Slider, render_detail_at};

use super::load_catalog;

const CATALOG_UNAVAILABLE: &str = "No se pudo cargar el catálogo";
const PRODUCT_NOT_FOUND: &str = "Producto no encontrado";

/// Extract the `id` parameter from a query string such as `?id=7`.
///
/// An absent or empty `id` yields `None`.
///
/// # Examples
///
/// ```
/// use vitrina::pages::product_id_from_query;
///
/// assert_eq!(product_id_from_query("?id=7"), Some("7".to_string()));
/// assert_eq!(product_id_from_query("lang=es&id=SKU%2012"), Some("SKU 12".to_string()));
/// assert_eq!(product_id_from_query("?id="), None);
/// assert_eq!(product_id_from_query(""), None);
/// ```
pub fn product_id_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
}

/// State of one detail page load: the product, its gallery, and which
/// image is on display.
#[derive(Debug, Clone)]
pub struct DetailPage {
    product: Product,
    gallery: Gallery,
    ctx: RenderContext,
    slider: Slider,
}

impl DetailPage {
    /// Load the page for a query string (`?id=...`).
    pub async fn load_query(
        query: &str,
        config: &VitrinaConfig,
        fetcher: &AssetFetcher,
    ) -> Result<Self, Panel> {
        Self::load(product_id_from_query(query).as_deref(), config, fetcher).await
    }

    /// Load the page for a product id.
    ///
    /// - no id → "not found" panel
    /// - catalog unreachable → error panel
    /// - unknown id → "Producto no encontrado" error panel
    pub async fn load(
        id: Option<&str>,
        config: &VitrinaConfig,
        fetcher: &AssetFetcher,
    ) -> Result<Self, Panel> {
        let Some(id) = id.filter(|id| !id.is_empty()) else {
            log::debug!("Detail page opened without a product id");
            return Err(Panel::missing_product_id());
        };

        let resolver = create_resolver(&config.images, fetcher).await;
        let catalog = match load_catalog(fetcher, &config.catalog.source).await {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("Failed to load catalog: {e}");
                return Err(Panel::product_load_error(CATALOG_UNAVAILABLE));
            }
        };

        Self::from_catalog(id, &catalog, resolver.as_ref(), RenderContext::from_config(config))
            .await
    }

    /// Find `id` in an already loaded catalog and resolve its gallery.
    pub async fn from_catalog(
        id: &str,
        catalog: &Catalog,
        resolver: &dyn ImageResolver,
        ctx: RenderContext,
    ) -> Result<Self, Panel> {
        let Some(product) = catalog.find(id) else {
            log::warn!("{}", Error::product_not_found(id));
            return Err(Panel::product_load_error(PRODUCT_NOT_FOUND));
        };
        let gallery = resolver.resolve(id).await;
        Ok(Self::new(product.clone(), gallery, ctx))
    }

    /// Page for a product whose gallery is already known.
    pub fn new(product: Product, gallery: Gallery, ctx: RenderContext) -> Self {
        let slider = Slider::new(gallery.len());
        Self {
            product,
            gallery,
            ctx,
            slider,
        }
    }

    /// The product shown.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Its gallery.
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Index of the image on display.
    pub fn active_image(&self) -> usize {
        self.slider.index()
    }

    /// Show image `index` (thumbnail click). Out-of-range is ignored.
    pub fn select_image(&mut self, index: usize) -> bool {
        self.slider.go_to(index)
    }

    /// Show the next image, if any.
    pub fn next_image(&mut self) -> bool {
        self.slider.next()
    }

    /// Show the previous image, if any.
    pub fn prev_image(&mut self) -> bool {
        self.slider.prev()
    }

    /// Page title, `{product} - {site}`.
    pub fn title(&self) -> String {
        self.ctx.detail_title(&self.product)
    }

    /// Detail block in the current slider state.
    pub fn render(&self) -> Element {
        render_detail_at(&self.product, &self.gallery, &self.ctx, self.slider)
    }

    /// Detail block wrapped in a complete page.
    pub fn document(&self) -> Document {
        let back = Element::new("a")
            .class("back-link")
            .attr("href", "index.html")
            .text("← Volver al catálogo");
        let body = Element::new("main")
            .class("detail-page")
            .child(back)
            .child(
                Element::new("div")
                    .attr("id", "productDetailContent")
                    .child(self.render()),
            );
        Document::new(self.title(), body)
    }
}

/// Page shown in place of a detail page that failed to load.
pub fn panel_document(panel: &Panel, ctx: &RenderContext) -> Document {
    let body = Element::new("main")
        .class("detail-page")
        .child(
            Element::new("div")
                .attr("id", "productDetailContent")
                .child(panel.render()),
        );
    Document::new(ctx.site_name.clone(), body)
}
