//! HTML adapter for the visual tree.
//!
//! Text and attribute values are escaped. Images carrying a fallback
//! attribute get an `onerror` handler that swaps in the placeholder once.

use std::fmt::Write as _;

use crate::tree::{Element, FALLBACK_ATTR, Node};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Escape text for use in element content or a double-quoted attribute.
///
/// # Examples
///
/// ```
/// use vitrina_render::html::escape;
///
/// assert_eq!(escape(r#"<a href="x">&</a>"#), "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
/// ```
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn js_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Render a node as HTML.
pub fn render_node(node: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

/// Render an element as HTML.
pub fn render_element(el: &Element) -> String {
    let mut out = String::new();
    write_element(&mut out, el);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(&escape(text)),
        Node::Element(el) => write_element(out, el),
    }
}

fn write_element(out: &mut String, el: &Element) {
    let _ = write!(out, "<{}", el.tag());
    if !el.classes().is_empty() {
        let _ = write!(out, " class=\"{}\"", escape(&el.classes().join(" ")));
    }
    for (name, value) in el.attrs() {
        let _ = write!(out, " {name}=\"{}\"", escape(value));
    }
    if el.tag() == "img"
        && let Some(fallback) = el.get_attr(FALLBACK_ATTR)
    {
        let handler = format!(
            "this.onerror=null;this.src='{}'",
            js_single_quoted(fallback)
        );
        let _ = write!(out, " onerror=\"{}\"", escape(&handler));
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&el.tag()) {
        return;
    }
    for child in el.child_nodes() {
        write_node(out, child);
    }
    let _ = write!(out, "</{}>", el.tag());
}

// ============================================================================
// Document shell
// ============================================================================

/// A complete HTML page around a body element.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    base_href: Option<String>,
    stylesheet: Option<String>,
    script: Option<String>,
    body: Element,
}

impl Document {
    /// Page with `title` wrapping `body`.
    pub fn new(title: impl Into<String>, body: Element) -> Self {
        Self {
            title: title.into(),
            base_href: None,
            stylesheet: None,
            script: None,
            body,
        }
    }

    /// Resolve relative links against `href` (detail pages live one
    /// directory down).
    pub fn with_base(mut self, href: impl Into<String>) -> Self {
        self.base_href = Some(href.into());
        self
    }

    /// Link a stylesheet.
    pub fn with_stylesheet(mut self, href: impl Into<String>) -> Self {
        self.stylesheet = Some(href.into());
        self
    }

    /// Load a script at the end of the body.
    pub fn with_script(mut self, src: impl Into<String>) -> Self {
        self.script = Some(src.into());
        self
    }

    /// Page title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render the full document.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n<html lang=\"es\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        if let Some(base) = &self.base_href {
            let _ = writeln!(out, "<base href=\"{}\">", escape(base));
        }
        let _ = writeln!(out, "<title>{}</title>", escape(&self.title));
        if let Some(href) = &self.stylesheet {
            let _ = writeln!(out, "<link rel=\"stylesheet\" href=\"{}\">", escape(href));
        }
        out.push_str("</head>\n<body>\n");
        write_element(&mut out, &self.body);
        out.push('\n');
        if let Some(src) = &self.script {
            let _ = writeln!(out, "<script src=\"{}\"></script>", escape(src));
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

// ============================================================================
// Static assets
// ============================================================================

/// Stylesheet shared by the listing and detail pages.
pub const STYLESHEET: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: #fdf8fa; color: #333; }
.catalog, .product-detail { max-width: 1200px; margin: 0 auto; padding: 1.5rem; }
.filters { display: flex; flex-wrap: wrap; gap: .75rem; margin-bottom: 1.5rem; }
.search-input { flex: 1 1 240px; padding: .6rem .9rem; border: 1px solid #ddd; border-radius: 8px; }
.filter-select { padding: .6rem; border: 1px solid #ddd; border-radius: 8px; }
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.25rem; }
.product-card { background: #fff; border-radius: 12px; overflow: hidden; box-shadow: 0 2px 8px rgba(0,0,0,.06); }
.product-card[hidden] { display: none; }
.product-image-container { position: relative; aspect-ratio: 1; background: #f4f4f4; }
.product-image { width: 100%; height: 100%; object-fit: cover; }
.slider-arrow { position: absolute; top: 50%; transform: translateY(-50%); border: 0; background: rgba(255,255,255,.8); border-radius: 50%; width: 2rem; height: 2rem; cursor: pointer; }
.slider-prev { left: .5rem; }
.slider-next { right: .5rem; }
.slider-dots { position: absolute; bottom: .5rem; width: 100%; display: flex; justify-content: center; gap: .35rem; }
.slider-dot { width: .55rem; height: .55rem; border: 0; border-radius: 50%; background: rgba(255,255,255,.6); padding: 0; cursor: pointer; }
.slider-dot.active { background: #d63384; }
.product-info { padding: 1rem; }
.product-name { font-size: 1.05rem; margin: 0 0 .4rem; }
.product-category, .detail-category, .detail-brand { display: inline-block; font-size: .75rem; padding: .15rem .5rem; border-radius: 999px; background: #fce4ef; color: #a61e64; }
.product-price, .detail-price { font-weight: 700; font-size: 1.2rem; margin: .5rem 0; color: #d63384; }
.product-brand, .product-presentation { font-size: .9rem; color: #555; }
.product-link { display: inline-block; margin-top: .6rem; color: #a61e64; }
.product-detail { display: grid; grid-template-columns: minmax(0, 1fr) minmax(0, 1fr); gap: 2rem; }
.main-product-image { width: 100%; border-radius: 12px; }
.thumbnail-gallery { display: flex; gap: .5rem; margin-top: .75rem; }
.thumbnail { width: 72px; height: 72px; object-fit: cover; border-radius: 8px; opacity: .6; cursor: pointer; border: 2px solid transparent; }
.thumbnail.active { opacity: 1; border-color: #d63384; }
.spec-item { display: flex; gap: .5rem; padding: .4rem 0; border-bottom: 1px solid #eee; }
.spec-label { font-weight: 600; }
.whatsapp-btn { display: inline-block; margin-top: 1.25rem; padding: .8rem 1.4rem; background: #25d366; color: #fff; border-radius: 999px; text-decoration: none; font-weight: 600; }
.error, .no-results { text-align: center; padding: 3rem 1rem; }
@media (max-width: 720px) { .product-detail { grid-template-columns: 1fr; } }
"#;

/// Client-side behavior: filtering, card sliders, detail thumbnails.
///
/// Mirrors the Rust filter predicate and slider state machine so the static
/// pages behave like the rendered trees.
pub const SCRIPT: &str = r#"
(function () {
  var SWIPE = 50;

  document.querySelectorAll('.image-slider').forEach(function (slider) {
    var main = slider.querySelector('.main-image');
    var dots = Array.prototype.slice.call(slider.querySelectorAll('.slider-dot'));
    var index = 0;
    function goTo(i) {
      if (i < 0 || i >= dots.length || i === index) return;
      index = i;
      main.src = dots[i].dataset.src;
      dots.forEach(function (d, j) { d.classList.toggle('active', j === i); });
      slider.dataset.index = String(i);
    }
    slider.querySelector('.slider-prev').addEventListener('click', function () { goTo(index - 1); });
    slider.querySelector('.slider-next').addEventListener('click', function () { goTo(index + 1); });
    dots.forEach(function (d, j) { d.addEventListener('click', function () { goTo(j); }); });
    var startX = null;
    slider.addEventListener('touchstart', function (e) { startX = e.changedTouches[0].clientX; });
    slider.addEventListener('touchend', function (e) {
      if (startX === null) return;
      var travel = startX - e.changedTouches[0].clientX;
      if (travel > SWIPE) goTo(index + 1);
      else if (travel < -SWIPE) goTo(index - 1);
      startX = null;
    });
  });

  var mainImage = document.getElementById('mainImage');
  var thumbs = document.querySelectorAll('.thumbnail');
  thumbs.forEach(function (t) {
    t.addEventListener('click', function () {
      mainImage.src = t.src;
      thumbs.forEach(function (o) { o.classList.remove('active'); });
      t.classList.add('active');
    });
  });

  var search = document.getElementById('searchInput');
  var category = document.getElementById('categoryFilter');
  var brand = document.getElementById('brandFilter');
  var grid = document.querySelector('.product-grid');
  if (!search || !grid) return;
  var empty = document.createElement('div');
  empty.className = 'no-results';
  empty.hidden = true;
  empty.innerHTML = '<h2>No se Encontraron Productos</h2>' +
    '<p>Intenta ajustar tus filtros o términos de búsqueda.</p>';
  grid.parentNode.appendChild(empty);

  function apply() {
    var term = search.value.toLowerCase();
    var shown = 0;
    grid.querySelectorAll('.product-card').forEach(function (card) {
      var d = card.dataset;
      var matchesSearch = !term ||
        d.name.toLowerCase().indexOf(term) !== -1 ||
        d.brand.toLowerCase().indexOf(term) !== -1 ||
        d.presentation.toLowerCase().indexOf(term) !== -1;
      var ok = matchesSearch &&
        (!category.value || d.category === category.value) &&
        (!brand.value || d.brand === brand.value);
      card.hidden = !ok;
      if (ok) shown++;
    });
    empty.hidden = shown > 0;
  }
  search.addEventListener('input', apply);
  category.addEventListener('change', apply);
  brand.addEventListener('change', apply);
})();
"#;
