//! Panels shown in place of pages.

use vitrina::pages::panel_document;
use vitrina::render::{Panel, RenderContext};

#[test]
fn test_panel_document_uses_site_title() {
    let ctx = RenderContext {
        site_name: "Tienda <Sol>".into(),
        ..RenderContext::default()
    };
    let html = panel_document(&Panel::missing_product_id(), &ctx).to_html();
    assert!(html.contains("<title>Tienda &lt;Sol&gt;</title>"));
    assert!(html.contains("No se especificó un producto válido."));
    assert!(html.contains("id=\"productDetailContent\""));
}

#[test]
fn test_product_error_message_escaped() {
    let panel = Panel::product_load_error("<b>boom</b>");
    let html = panel_document(&panel, &RenderContext::default()).to_html();
    assert!(html.contains("&lt;b&gt;boom&lt;/b&gt;"));
    assert!(!html.contains("<b>boom"));
}
