//! The listing page body: filter controls and the product grid.

use vitrina_catalog::FilterParams;

use crate::panels::Panel;
use crate::tree::Element;

/// Dropdown options and current selections for the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterBar<'a> {
    /// Category options, already sorted.
    pub categories: &'a [String],
    /// Brand options, already sorted.
    pub brands: &'a [String],
    /// Current filter values, reflected as selected/filled controls.
    pub params: &'a FilterParams,
}

impl FilterBar<'_> {
    /// Visual tree for the search box and both dropdowns.
    pub fn render(&self) -> Element {
        let search = Element::new("input")
            .class("search-input")
            .attr("id", "searchInput")
            .attr("type", "search")
            .attr("placeholder", "Buscar productos...")
            .attr("value", self.params.search.as_str());

        Element::new("div")
            .class("filters")
            .child(search)
            .child(select(
                "categoryFilter",
                "Todas las categorías",
                self.categories,
                &self.params.category,
            ))
            .child(select(
                "brandFilter",
                "Todas las marcas",
                self.brands,
                &self.params.brand,
            ))
    }
}

fn select(id: &str, all_label: &str, options: &[String], selected: &str) -> Element {
    let all = Element::new("option").attr("value", "").text(all_label);
    let options = options.iter().map(|value| {
        let option = Element::new("option").attr("value", value.as_str());
        let option = if value == selected {
            option.attr("selected", "selected")
        } else {
            option
        };
        option.text(value.as_str())
    });

    Element::new("select")
        .class("filter-select")
        .attr("id", id)
        .child(all)
        .children(options)
}

/// Product grid, or the "no results" panel when `cards` is empty.
pub fn render_grid(cards: Vec<Element>) -> Element {
    let container = Element::new("div").attr("id", "productContainer");
    if cards.is_empty() {
        return container.child(Panel::no_results().render());
    }
    container.child(Element::new("div").class("product-grid").children(cards))
}

/// Whole listing body: filter bar above the grid.
pub fn render_listing(bar: &FilterBar<'_>, cards: Vec<Element>) -> Element {
    Element::new("main")
        .class("catalog")
        .child(bar.render())
        .child(render_grid(cards))
}
