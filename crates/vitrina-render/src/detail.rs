//! The single-product detail block.

use vitrina_catalog::Product;
use vitrina_images::Gallery;

use crate::context::RenderContext;
use crate::slider::Slider;
use crate::tree::{Element, image};

/// Build the detail block for one product, showing the first image.
pub fn render_detail(product: &Product, gallery: &Gallery, ctx: &RenderContext) -> Element {
    render_detail_at(product, gallery, ctx, Slider::new(gallery.len()))
}

/// Build the detail block with the image selected by `slider` displayed.
pub fn render_detail_at(
    product: &Product,
    gallery: &Gallery,
    ctx: &RenderContext,
    slider: Slider,
) -> Element {
    Element::new("div")
        .class("product-detail")
        .child(detail_gallery(product, gallery, ctx, slider))
        .child(detail_info(product, ctx))
}

fn detail_gallery(
    product: &Product,
    gallery: &Gallery,
    ctx: &RenderContext,
    slider: Slider,
) -> Element {
    let shown = gallery.get(slider.index()).unwrap_or_else(|| gallery.main());
    let main = image(shown, product.name(), &ctx.placeholder)
        .class("main-product-image")
        .attr("id", "mainImage");

    let block = Element::new("div")
        .class("product-detail-gallery")
        .child(Element::new("div").class("main-image-container").child(main));

    if !gallery.has_multiple() {
        return block;
    }

    let thumbs = gallery.iter().enumerate().map(|(i, url)| {
        image(url, &format!("{} - {}", product.name(), i + 1), &ctx.placeholder)
            .class("thumbnail")
            .class_if(slider.is_active(i), "active")
            .attr("data-index", i.to_string())
    });

    block.child(
        Element::new("div")
            .class("thumbnail-gallery")
            .attr("id", "thumbnailGallery")
            .children(thumbs),
    )
}

fn detail_info(product: &Product, ctx: &RenderContext) -> Element {
    let mut info = Element::new("div")
        .class("product-detail-info")
        .child(
            Element::new("div")
                .class("detail-tags")
                .child(
                    Element::new("span")
                        .class("detail-category")
                        .text(product.category()),
                )
                .child(Element::new("span").class("detail-brand").text(product.brand())),
        )
        .child(Element::new("h1").class("detail-name").text(product.name()))
        .child(Element::new("div").class("detail-price").text(product.price()));

    if let Some(description) = product.description() {
        info = info.child(
            Element::new("div")
                .class("detail-description")
                .text(description),
        );
    }

    info.child(
        Element::new("div")
            .class("detail-specs")
            .child(spec("Marca:", product.brand()))
            .child(spec("Presentación:", product.presentation()))
            .child(spec("Categoría:", product.category())),
    )
    .child(
        Element::new("div").class("detail-actions").child(
            Element::new("a")
                .class("whatsapp-btn")
                .attr("href", ctx.contact.url(product))
                .attr("target", "_blank")
                .attr("rel", "noopener")
                .text(ctx.contact.label()),
        ),
    )
}

fn spec(label: &str, value: &str) -> Element {
    Element::new("div")
        .class("spec-item")
        .child(Element::new("span").class("spec-label").text(label))
        .child(Element::new("span").class("spec-value").text(value))
}
