//! Product cards for the listing page.

use vitrina_catalog::Product;
use vitrina_images::Gallery;

use crate::context::RenderContext;
use crate::slider::Slider;
use crate::tree::{Element, image};

/// Build the card for one product.
///
/// A single-image gallery shows just the image. Larger galleries get a
/// slider: previous/next arrows and one dot per image, with the dot of the
/// displayed image marked `active`.
pub fn render_card(product: &Product, gallery: &Gallery, ctx: &RenderContext) -> Element {
    let card = Element::new("div")
        .class("product-card")
        .attr("data-id", product.id())
        .attr("data-name", product.name())
        .attr("data-category", product.category())
        .attr("data-brand", product.brand())
        .attr("data-presentation", product.presentation())
        .child(card_gallery(product, gallery, ctx, Slider::new(gallery.len())));

    let mut info = Element::new("div")
        .class("product-info")
        .child(Element::new("h2").class("product-name").text(product.name()))
        .child(
            Element::new("span")
                .class("product-category")
                .text(product.category()),
        )
        .child(Element::new("div").class("product-price").text(product.price()))
        .child(labeled("product-brand", "Marca:", product.brand()))
        .child(labeled(
            "product-presentation",
            "Tamaño:",
            product.presentation(),
        ));

    match ctx.detail_href(product) {
        Some(href) => {
            info = info.child(
                Element::new("a")
                    .class("product-link")
                    .attr("href", href)
                    .text("Ver detalles"),
            );
        }
        None => log::debug!("Product {:?} has no linkable id", product.id()),
    }

    card.child(info)
}

/// Gallery block of a card in a given slider state.
pub fn card_gallery(
    product: &Product,
    gallery: &Gallery,
    ctx: &RenderContext,
    slider: Slider,
) -> Element {
    let shown = gallery.get(slider.index()).unwrap_or_else(|| gallery.main());
    let main = image(shown, &format!("Producto {}", product.id()), &ctx.placeholder)
        .class("product-image main-image");

    let container = Element::new("div").class("product-image-container");
    if !gallery.has_multiple() {
        return container.child(main);
    }

    let dots = gallery.iter().enumerate().map(|(i, url)| {
        Element::new("button")
            .class("slider-dot")
            .class_if(slider.is_active(i), "active")
            .attr("type", "button")
            .attr("data-index", i.to_string())
            .attr("data-src", url)
            .attr("aria-label", format!("Imagen {}", i + 1))
    });

    container
        .class("image-slider")
        .attr("data-index", slider.index().to_string())
        .child(main)
        .child(arrow("slider-prev", "‹", "Imagen anterior"))
        .child(arrow("slider-next", "›", "Imagen siguiente"))
        .child(Element::new("div").class("slider-dots").children(dots))
}

fn arrow(class: &str, glyph: &str, label: &str) -> Element {
    Element::new("button")
        .class("slider-arrow")
        .class(class)
        .attr("type", "button")
        .attr("aria-label", label)
        .text(glyph)
}

fn labeled(class: &str, label: &str, value: &str) -> Element {
    Element::new("div")
        .class(class)
        .child(Element::new("strong").text(label))
        .text(format!(" {value}"))
}
