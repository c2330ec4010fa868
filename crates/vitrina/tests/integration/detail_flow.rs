//! Detail page outcomes.

use vitrina::pages::{DetailPage, panel_document};
use vitrina::render::{Panel, RenderContext};

use crate::common::TestHarness;

#[tokio::test]
async fn test_found_product_renders_gallery_and_contact() {
    let h = TestHarness::new();
    let page = DetailPage::load_query("?id=1", &h.config, &h.fetcher).await.unwrap();

    assert_eq!(page.title(), "Hydra Serum - Crystal Beauty");
    assert_eq!(page.gallery().len(), 3);

    let tree = page.render();
    assert_eq!(tree.find_all_class("thumbnail").len(), 3);
    let desc = tree.find_class("detail-description").unwrap();
    assert_eq!(desc.text_content(), "Serum ligero de uso diario");

    let button = tree.find_class("whatsapp-btn").unwrap();
    let href = button.get_attr("href").unwrap();
    assert!(href.starts_with("https://wa.me/50670935053?text="));
    assert!(href.contains("Hydra%20Serum"));
}

#[tokio::test]
async fn test_empty_description_is_omitted() {
    let h = TestHarness::new();
    let page = DetailPage::load(Some("2"), &h.config, &h.fetcher).await.unwrap();
    assert!(page.render().find_class("detail-description").is_none());
}

#[tokio::test]
async fn test_unknown_id() {
    let h = TestHarness::new();
    let panel = DetailPage::load(Some("404"), &h.config, &h.fetcher).await.unwrap_err();
    assert_eq!(panel, Panel::product_load_error("Producto no encontrado"));
}

#[tokio::test]
async fn test_dropped_row_id_is_unknown() {
    let h = TestHarness::new();
    let panel = DetailPage::load(Some("4"), &h.config, &h.fetcher).await.unwrap_err();
    assert_eq!(panel.lines, ["Producto no encontrado"]);
}

#[tokio::test]
async fn test_missing_id() {
    let h = TestHarness::new();
    for query in ["", "?", "?id=", "?other=1"] {
        let panel = DetailPage::load_query(query, &h.config, &h.fetcher).await.unwrap_err();
        assert_eq!(panel, Panel::missing_product_id(), "query {query:?}");
    }
}

#[tokio::test]
async fn test_unreachable_catalog() {
    let h = TestHarness::new().without_catalog();
    let panel = DetailPage::load(Some("1"), &h.config, &h.fetcher).await.unwrap_err();
    assert_eq!(panel, Panel::product_load_error("No se pudo cargar el catálogo"));

    let html = panel_document(&panel, &RenderContext::from_config(&h.config)).to_html();
    assert!(html.contains("⚠️ Error al cargar el producto"));
}

#[tokio::test]
async fn test_thumbnail_navigation() {
    let h = TestHarness::new();
    let mut page = DetailPage::load(Some("1"), &h.config, &h.fetcher).await.unwrap();

    assert!(page.next_image());
    assert!(page.next_image());
    assert!(!page.next_image());
    assert_eq!(page.active_image(), 2);

    let tree = page.render();
    let thumbs = tree.find_all_class("thumbnail");
    assert!(thumbs[2].has_class("active"));
    assert!(!thumbs[0].has_class("active"));

    assert!(page.select_image(0));
    assert!(!page.prev_image());
}
