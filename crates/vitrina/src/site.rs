//! Static site builder.
//!
//! Renders the whole catalog to plain files that any web server can host:
//!
//! ```text
//! out/
//! ├── index.html          listing page
//! ├── styles.css
//! ├── catalog.js          sliders, thumbnails, client-side filtering
//! └── product/
//!     └── {slug}.html     one detail page per product
//! ```
//!
//! Detail pages carry `<base href="../">`, so image paths in the config stay
//! relative to the site root for both page kinds.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use vitrina_core::{AssetFetcher, Error, Result, VitrinaConfig};
use vitrina_images::{Gallery, create_resolver};
use vitrina_render::RenderContext;
use vitrina_render::html::{Document, SCRIPT, STYLESHEET};

use crate::pages::{DetailPage, ListingPage, load_catalog};

/// File name of the shared stylesheet.
pub const STYLESHEET_FILE: &str = "styles.css";

/// File name of the shared script.
pub const SCRIPT_FILE: &str = "catalog.js";

/// What a build wrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Output directory.
    pub out_dir: PathBuf,
    /// Detail pages written.
    pub detail_pages: usize,
    /// Products with no usable page name, or repeating an earlier product's id.
    pub skipped: Vec<String>,
    /// Products whose gallery is only the placeholder.
    pub without_images: usize,
    /// CSV rows dropped while parsing.
    pub dropped_rows: usize,
}

impl BuildReport {
    /// Total files written, assets included.
    pub fn files_written(&self) -> usize {
        self.detail_pages + 3
    }
}

/// Build the static site described by `config` into `out_dir`.
///
/// Unlike the page controllers, a catalog that cannot be loaded is an
/// error here: there is no page to show a panel on.
pub async fn build_site(
    config: &VitrinaConfig,
    fetcher: &AssetFetcher,
    out_dir: impl AsRef<Path>,
) -> Result<BuildReport> {
    let out_dir = out_dir.as_ref();
    let catalog = load_catalog(fetcher, &config.catalog.source).await?;
    let resolver = create_resolver(&config.images, fetcher).await;
    let ctx = RenderContext::from_config(config);

    let mut listing = ListingPage::new(catalog, resolver, ctx);
    let index = with_assets(listing.document().await);
    let (catalog, galleries, ctx) = listing.into_parts();

    let detail_dir = out_dir.join(&ctx.detail_dir);
    create_dir(&detail_dir).await?;

    write_file(&out_dir.join("index.html"), &index.to_html()).await?;
    write_file(&out_dir.join(STYLESHEET_FILE), STYLESHEET.trim_start()).await?;
    write_file(&out_dir.join(SCRIPT_FILE), SCRIPT.trim_start()).await?;

    let mut report = BuildReport {
        out_dir: out_dir.to_path_buf(),
        dropped_rows: catalog.dropped_rows(),
        ..BuildReport::default()
    };
    let mut written = HashSet::new();
    let placeholder = Gallery::placeholder(&ctx.placeholder);

    for product in &catalog {
        let Some(slug) = ctx.page_slug(product).filter(|s| written.insert(s.clone())) else {
            log::warn!("Skipping detail page for product id {:?}", product.id());
            report.skipped.push(product.id().to_string());
            continue;
        };

        let gallery = galleries.get(product.id()).unwrap_or(&placeholder);
        if gallery.is_placeholder() {
            report.without_images += 1;
        }

        let page = DetailPage::new(product.clone(), gallery.clone(), ctx.clone());
        let html = with_assets(page.document()).with_base("../").to_html();
        write_file(&detail_dir.join(format!("{slug}.html")), &html).await?;
        report.detail_pages += 1;
    }

    log::info!(
        "Built {} detail pages into {} ({} skipped, {} without images)",
        report.detail_pages,
        out_dir.display(),
        report.skipped.len(),
        report.without_images
    );
    Ok(report)
}

fn with_assets(doc: Document) -> Document {
    doc.with_stylesheet(STYLESHEET_FILE).with_script(SCRIPT_FILE)
}

async fn create_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

async fn write_file(path: &Path, contents: &str) -> Result<()> {
    log::debug!("Writing {}", path.display());
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}
