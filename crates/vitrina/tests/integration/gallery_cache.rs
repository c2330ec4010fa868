//! Galleries are resolved once per listing controller.

use std::sync::Arc;

use vitrina::catalog::Catalog;
use vitrina::core::{ImageConfig, ResolverStrategy};
use vitrina::images::ProbeResolver;
use vitrina::images::mock::MockProbe;
use vitrina::pages::ListingPage;
use vitrina::render::RenderContext;

use crate::common::PRODUCTS_CSV;

fn page(probe: Arc<MockProbe>) -> ListingPage {
    let images = ImageConfig {
        strategy: ResolverStrategy::Probe,
        manifest: None,
        ..ImageConfig::default()
    };
    ListingPage::new(
        Catalog::from_csv(PRODUCTS_CSV),
        Box::new(ProbeResolver::new(Box::new(probe), &images)),
        RenderContext::default(),
    )
}

#[tokio::test]
async fn test_second_render_does_not_reprobe() {
    let probe = Arc::new(MockProbe::new(["images/1.webp", "images/1-1.webp"]));
    let mut page = page(probe.clone());

    page.render().await;
    // 4 products, main + 5 extras each, one extension
    assert_eq!(probe.calls(), 24);

    page.set_category("Skin Care");
    page.render().await;
    page.set_category("");
    page.render().await;
    assert_eq!(probe.calls(), 24);
}

#[tokio::test]
async fn test_filtered_render_only_resolves_visible() {
    let probe = Arc::new(MockProbe::new(Vec::<String>::new()));
    let mut page = page(probe.clone());

    page.set_brand("Nivea");
    let cards = page.render_cards().await;
    assert_eq!(cards.len(), 2);
    assert_eq!(page.cached_galleries(), 2);
    assert_eq!(probe.calls(), 12);
}

#[tokio::test]
async fn test_single_gallery_lookup_is_cached() {
    let probe = Arc::new(MockProbe::new(["images/5.webp"]));
    let mut page = page(probe.clone());

    assert_eq!(page.gallery("5").await.main(), "images/5.webp");
    page.gallery("5").await;
    assert_eq!(probe.calls(), 6);
}
