//! Catalog command handlers.
//!
//! Each handler loads what it needs from the configuration, does its work
//! through the library crates, and returns the text to print, so the
//! formatting is testable without capturing stdout.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use vitrina::pages::{DetailPage, ListingPage, load_catalog, product_id_from_query};
use vitrina::site::build_site;
use vitrina_catalog::{Catalog, FilterParams, Product, write_csv};
use vitrina_core::{AssetFetcher, VitrinaConfig};
use vitrina_render::Panel;

// ============================================================================
// build
// ============================================================================

/// Write the static site and summarize what was written.
pub async fn cmd_build(config: &VitrinaConfig, out: &Path) -> Result<String> {
    let fetcher = AssetFetcher::new()?;
    let report = build_site(config, &fetcher, out)
        .await
        .with_context(|| format!("building site into {}", out.display()))?;

    let mut summary = format!(
        "Wrote {} files to {} ({} product pages)",
        report.files_written(),
        report.out_dir.display(),
        report.detail_pages
    );
    if report.without_images > 0 {
        summary.push_str(&format!("\n{} products have no images", report.without_images));
    }
    if report.dropped_rows > 0 {
        summary.push_str(&format!("\n{} CSV rows were skipped", report.dropped_rows));
    }
    if !report.skipped.is_empty() {
        summary.push_str(&format!(
            "\nNo page written for ids: {}",
            report.skipped.join(", ")
        ));
    }
    Ok(summary)
}

// ============================================================================
// list / options / export
// ============================================================================

/// List the products passing `params`.
pub async fn cmd_list(config: &VitrinaConfig, params: FilterParams, json: bool) -> Result<String> {
    let catalog = fetch_catalog(config).await?;
    let products = catalog.filter(&params);
    if json {
        Ok(serde_json::to_string_pretty(&products)?)
    } else {
        Ok(format_table(&products))
    }
}

/// Fixed-width table of id, name, brand, and price.
pub fn format_table(products: &[&Product]) -> String {
    if products.is_empty() {
        return "No se Encontraron Productos".to_string();
    }
    let width = |f: fn(&Product) -> &str, min: usize| {
        products
            .iter()
            .map(|p| f(p).chars().count())
            .max()
            .unwrap_or(0)
            .max(min)
    };
    let id_w = width(Product::id, 2);
    let name_w = width(Product::name, 4);
    let brand_w = width(Product::brand, 5);

    let mut out = format!(
        "{:<id_w$}  {:<name_w$}  {:<brand_w$}  PRICE",
        "ID", "NAME", "BRAND"
    );
    for p in products {
        out.push('\n');
        out.push_str(
            format!(
                "{:<id_w$}  {:<name_w$}  {:<brand_w$}  {}",
                p.id(),
                p.name(),
                p.brand(),
                p.price()
            )
            .trim_end(),
        );
    }
    out
}

#[derive(Debug, Serialize)]
struct FilterOptions<'a> {
    categories: &'a [String],
    brands: &'a [String],
}

/// Category and brand options, as the dropdowns would show them.
pub async fn cmd_options(config: &VitrinaConfig, json: bool) -> Result<String> {
    let fetcher = AssetFetcher::new()?;
    let page = ListingPage::load(config, &fetcher)
        .await
        .map_err(panel_error)?;
    let options = FilterOptions {
        categories: page.categories(),
        brands: page.brands(),
    };
    if json {
        return Ok(serde_json::to_string_pretty(&options)?);
    }

    let mut out = String::from("Categorías:");
    for c in options.categories {
        out.push_str(&format!("\n  {c}"));
    }
    out.push_str("\nMarcas:");
    for b in options.brands {
        out.push_str(&format!("\n  {b}"));
    }
    Ok(out)
}

/// Write the products passing `params` as CSV, to `out` or stdout.
///
/// Returns the number of products written.
pub async fn cmd_export(
    config: &VitrinaConfig,
    params: FilterParams,
    out: Option<&Path>,
) -> Result<usize> {
    let catalog = fetch_catalog(config).await?;
    let products = catalog.filter(&params);
    let count = match out {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            write_csv(file, catalog.headers(), products)?
        }
        None => write_csv(io::stdout().lock(), catalog.headers(), products)?,
    };
    log::info!("Exported {count} products");
    Ok(count)
}

// ============================================================================
// show
// ============================================================================

/// Render the detail page for an id or a `?id=` query string.
pub async fn cmd_show(
    config: &VitrinaConfig,
    id: Option<&str>,
    query: Option<&str>,
) -> Result<String> {
    let id = match (id, query) {
        (Some(id), _) => Some(id.to_string()),
        (None, Some(query)) => product_id_from_query(query),
        (None, None) => None,
    };
    let fetcher = AssetFetcher::new()?;
    let page = DetailPage::load(id.as_deref(), config, &fetcher)
        .await
        .map_err(panel_error)?;
    Ok(page.document().to_html())
}

// ============================================================================
// Helpers
// ============================================================================

async fn fetch_catalog(config: &VitrinaConfig) -> Result<Catalog> {
    let fetcher = AssetFetcher::new()?;
    let catalog = load_catalog(&fetcher, &config.catalog.source)
        .await
        .with_context(|| format!("loading catalog from {}", config.catalog.source))?;
    Ok(catalog)
}

/// Turn a page panel into a command error carrying its text.
fn panel_error(panel: Panel) -> anyhow::Error {
    anyhow::anyhow!("{}: {}", panel.title, panel.lines.join(" "))
}

/// Print `text` followed by a newline, tolerating a closed pipe.
pub fn emit(text: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match writeln!(stdout, "{text}") {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => Ok(other?),
    }
}
