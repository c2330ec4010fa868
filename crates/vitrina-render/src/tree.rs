//! Renderer-independent visual tree.
//!
//! Cards, detail blocks, and panels are built as plain data: elements with
//! a tag, classes, attributes, and children. Nothing here knows about HTML
//! syntax; see [`crate::html`] for the adapter.

use serde::Serialize;

/// Attribute that carries the runtime fallback image of an `<img>`.
pub const FALLBACK_ATTR: &str = "data-fallback";

/// A node in the visual tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// An element with children.
    Element(Element),
    /// Literal text.
    Text(String),
}

impl Node {
    /// Text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// The element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// A tagged element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Empty element with `tag`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add one or more space-separated classes.
    pub fn class(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        }
        self
    }

    /// Add `class` when `condition` holds.
    pub fn class_if(self, condition: bool, class: &str) -> Self {
        if condition { self.class(class) } else { self }
    }

    /// Set an attribute, replacing an earlier value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Append a child element or node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children.
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::text(text))
    }

    /// Tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Classes in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Attributes in insertion order (classes excluded).
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Child nodes.
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Returns `true` if the element carries `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// First element (self included, depth-first) matching `pred`.
    pub fn find<F>(&self, pred: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool + Copy,
    {
        if pred(self) {
            return Some(self);
        }
        self.children
            .iter()
            .filter_map(Node::as_element)
            .find_map(|el| el.find(pred))
    }

    /// All elements (self included, depth-first) matching `pred`.
    pub fn find_all<F>(&self, pred: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool + Copy,
    {
        let mut out = Vec::new();
        self.walk(&mut |el| {
            if pred(el) {
                out.push(el);
            }
        });
        out
    }

    /// First element carrying `class`.
    pub fn find_class(&self, class: &str) -> Option<&Element> {
        self.find(|el| el.has_class(class))
    }

    /// All elements carrying `class`.
    pub fn find_all_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(|el| el.has_class(class))
    }

    fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        visit(self);
        for child in self.children.iter().filter_map(Node::as_element) {
            child.walk(visit);
        }
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}

/// An `<img>` with the placeholder wired in as its load-failure fallback.
pub fn image(src: &str, alt: &str, placeholder: &str) -> Element {
    Element::new("img")
        .attr("src", src)
        .attr("alt", alt)
        .attr("loading", "lazy")
        .attr(FALLBACK_ATTR, placeholder)
}
