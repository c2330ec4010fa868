//! Page controllers.
//!
//! A controller is created once per page load and owns everything that
//! page needs: the catalog, the image resolver, cached galleries, and the
//! current filter or slider state. Loading never panics and never returns
//! a bare error to the caller; failures arrive as a [`Panel`] ready to be
//! shown in place of the page content.
//!
//! - [`ListingPage`]: filter bar plus product grid
//! - [`DetailPage`]: one product with gallery and contact link

mod detail;
mod listing;

pub use detail::{DetailPage, panel_document, product_id_from_query};
pub use listing::ListingPage;

use vitrina_catalog::Catalog;
use vitrina_core::{AssetFetcher, Result};
use vitrina_render::Panel;

/// Fetch and parse the catalog CSV.
///
/// Dropped rows are not an error, but they are reported at `warn` so a
/// stray comma in the spreadsheet does not go unnoticed.
pub async fn load_catalog(fetcher: &AssetFetcher, location: &str) -> Result<Catalog> {
    let text = fetcher.fetch_text(location).await?;
    let catalog = Catalog::from_csv(&text);
    log::info!("Loaded {} products from {location}", catalog.len());
    if catalog.dropped_rows() > 0 {
        log::warn!(
            "{} rows in {location} were skipped (field count did not match the header)",
            catalog.dropped_rows()
        );
    }
    Ok(catalog)
}

/// Final path segment of a location, for user-facing messages.
fn file_name(location: &str) -> &str {
    location
        .trim_end_matches('/')
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(location)
}

/// Panel shown when the listing page cannot load its catalog.
fn listing_error_panel(location: &str) -> Panel {
    Panel::catalog_load_error(&format!("No se pudo cargar {}", file_name(location)))
}
