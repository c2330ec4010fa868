//! Listing page: load, filter, render.

use vitrina::catalog::FilterParams;
use vitrina::pages::ListingPage;
use vitrina::render::html::render_element;

use crate::common::TestHarness;

#[tokio::test]
async fn test_load_builds_options_and_skips_bad_rows() {
    let h = TestHarness::new();
    let page = ListingPage::load(&h.config, &h.fetcher).await.unwrap();

    assert_eq!(page.catalog().len(), 4);
    assert_eq!(page.catalog().dropped_rows(), 1);
    assert_eq!(page.categories(), ["Body", "Lips", "Skin Care"]);
    assert_eq!(page.brands(), ["Eucerin", "Nivea"]);
}

#[tokio::test]
async fn test_quoted_name_keeps_comma() {
    let h = TestHarness::new();
    let page = ListingPage::load(&h.config, &h.fetcher).await.unwrap();
    assert_eq!(page.catalog().find("3").unwrap().name(), "Night Cream, Rich");
}

#[tokio::test]
async fn test_combined_filters() {
    let h = TestHarness::new();
    let mut page = ListingPage::load(&h.config, &h.fetcher).await.unwrap();

    page.set_filter(FilterParams::default().with_search("CREAM").with_brand("Eucerin"));
    let ids: Vec<&str> = page.visible().iter().map(|p| p.id()).collect();
    assert_eq!(ids, ["3"]);

    page.set_brand("Nivea");
    assert!(page.visible().is_empty());
    let tree = page.render().await;
    assert!(tree.find_class("no-results").is_some());
    assert!(tree.find_class("product-grid").is_none());
}

#[tokio::test]
async fn test_search_matches_presentation() {
    let h = TestHarness::new();
    let mut page = ListingPage::load(&h.config, &h.fetcher).await.unwrap();
    page.set_search("400 ML");
    let ids: Vec<&str> = page.visible().iter().map(|p| p.id()).collect();
    assert_eq!(ids, ["2"]);
}

#[tokio::test]
async fn test_cards_reflect_galleries() {
    let h = TestHarness::new();
    let mut page = ListingPage::load(&h.config, &h.fetcher).await.unwrap();
    let tree = page.render().await;

    let cards = tree.find_all_class("product-card");
    assert_eq!(cards.len(), 4);

    let first = cards[0];
    assert_eq!(first.get_attr("data-id"), Some("1"));
    assert!(first.find_class("image-slider").is_some());
    assert_eq!(first.find_all_class("slider-dot").len(), 3);

    let third = cards[2];
    assert!(third.find_class("image-slider").is_none());
    let img = third.find_class("product-image").unwrap();
    assert_eq!(img.get_attr("src"), Some("images/3.webp"));

    let second = cards[1];
    let img = second.find_class("product-image").unwrap();
    assert_eq!(img.get_attr("src"), Some("images/placeholder.svg"));
}

#[tokio::test]
async fn test_card_links_to_detail_page() {
    let h = TestHarness::new();
    let mut page = ListingPage::load(&h.config, &h.fetcher).await.unwrap();
    let cards = page.render_cards().await;
    let link = cards[0].find_class("product-link").unwrap();
    assert_eq!(link.get_attr("href"), Some("product/1.html"));
}

#[tokio::test]
async fn test_missing_catalog_yields_error_panel() {
    let h = TestHarness::new().without_catalog();
    let panel = ListingPage::load(&h.config, &h.fetcher).await.unwrap_err();

    assert!(panel.is_error());
    assert_eq!(panel.lines[0], "No se pudo cargar missing.csv");
    let html = render_element(&panel.render());
    assert!(html.contains("⚠️ Error Cargando Productos"));
}

#[tokio::test]
async fn test_broken_manifest_still_lists_products() {
    let h = TestHarness::new();
    std::fs::write(h.dir.path().join("images.json"), "{not json").unwrap();
    let mut page = ListingPage::load(&h.config, &h.fetcher).await.unwrap();
    // falls back to probing ./images/, where nothing exists
    let cards = page.render_cards().await;
    assert_eq!(cards.len(), 4);
    assert!(cards.iter().all(|c| c.find_class("image-slider").is_none()));
}
