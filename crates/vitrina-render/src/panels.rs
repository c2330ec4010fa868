//! Inline status panels shown in place of content.
//!
//! Every failure a page can hit ends up as one of these, never as a crash.

use crate::tree::Element;

/// Visual style of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// Something went wrong (`div.error`).
    Error,
    /// The filters matched nothing (`div.no-results`).
    NoResults,
}

/// A heading plus explanatory paragraphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    /// Panel style.
    pub kind: PanelKind,
    /// Heading text.
    pub title: String,
    /// Paragraphs, in order.
    pub lines: Vec<String>,
}

impl Panel {
    fn new(kind: PanelKind, title: &str, lines: Vec<String>) -> Self {
        Self {
            kind,
            title: title.to_string(),
            lines,
        }
    }

    /// The listing page could not load the catalog.
    pub fn catalog_load_error(message: &str) -> Self {
        Self::new(
            PanelKind::Error,
            "⚠️ Error Cargando Productos",
            vec![
                message.to_string(),
                "Asegúrate de que products.csv esté en el mismo directorio que este archivo HTML."
                    .to_string(),
            ],
        )
    }

    /// The current filters matched no product.
    pub fn no_results() -> Self {
        Self::new(
            PanelKind::NoResults,
            "No se Encontraron Productos",
            vec!["Intenta ajustar tus filtros o términos de búsqueda.".to_string()],
        )
    }

    /// The detail page was opened without a product id.
    pub fn missing_product_id() -> Self {
        Self::new(
            PanelKind::Error,
            "⚠️ Producto no encontrado",
            vec!["No se especificó un producto válido.".to_string()],
        )
    }

    /// The detail page failed: unknown id or unreachable catalog.
    pub fn product_load_error(message: &str) -> Self {
        Self::new(
            PanelKind::Error,
            "⚠️ Error al cargar el producto",
            vec![message.to_string()],
        )
    }

    /// Returns `true` for error panels.
    pub fn is_error(&self) -> bool {
        self.kind == PanelKind::Error
    }

    /// Visual tree for the panel.
    pub fn render(&self) -> Element {
        let class = match self.kind {
            PanelKind::Error => "error",
            PanelKind::NoResults => "no-results",
        };
        Element::new("div")
            .class(class)
            .child(Element::new("h2").text(&self.title))
            .children(self.lines.iter().map(|l| Element::new("p").text(l)))
    }
}
