//! In-memory catalog and filtering.
//!
//! The catalog is built once per load and never changes afterwards. All
//! filtering is a linear scan that preserves file order.
//!
//! # Example
//!
//! ```rust
//! use vitrina_catalog::{Catalog, FilterParams};
//!
//! let catalog = Catalog::from_csv(
//!     "ID,Product Name,Product Type,Brand,Selling Price CRC,Presentation\n\
//!      1,Serum,Skin Care,Nivea,₡1,30 ml\n\
//!      2,Gel,Body,Nivea,₡2,200 ml",
//! );
//!
//! let params = FilterParams {
//!     category: "Body".to_string(),
//!     ..Default::default()
//! };
//! assert_eq!(catalog.filter(&params).len(), 1);
//! ```

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::parser::{ParsedCsv, parse_csv};
use crate::product::{Product, fields};

// ============================================================================
// Filter parameters
// ============================================================================

/// The three listing predicates. An empty string means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Case-insensitive substring matched against name, brand, and
    /// presentation.
    #[serde(default)]
    pub search: String,

    /// Exact match against `Product Type`.
    #[serde(default)]
    pub category: String,

    /// Exact match against `Brand`.
    #[serde(default)]
    pub brand: String,
}

impl FilterParams {
    /// Set the free-text search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the brand filter.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Returns `true` when no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.category.is_empty() && self.brand.is_empty()
    }

    /// Whether a single product satisfies all three predicates.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && (self.category.is_empty() || product.category() == self.category)
            && (self.brand.is_empty() || product.brand() == self.brand)
    }

    fn matches_search(&self, product: &Product) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [product.name(), product.brand(), product.presentation()]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Filter products, keeping their original order.
pub fn filter<'a, I>(products: I, params: &FilterParams) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products.into_iter().filter(|p| params.matches(p)).collect()
}

/// Sorted, de-duplicated values of one field across products.
///
/// Empty values are deliberately left out, unlike a plain set of every
/// cell value: a blank cell would otherwise become an empty dropdown option
/// that reads the same as "all".
pub fn distinct_values<'a, I>(products: I, field: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .map(|p| p.field(field))
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Catalog
// ============================================================================

/// Immutable, ordered collection of products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    headers: Arc<[String]>,
    products: Vec<Product>,
    dropped_rows: usize,
}

impl Catalog {
    /// Build a catalog from raw CSV text.
    pub fn from_csv(text: &str) -> Self {
        parse_csv(text).into()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Header names of the source file.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All products, in file order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Rows that were discarded while parsing.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// First product whose id equals `id`.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Products matching `params`, in file order.
    pub fn filter(&self, params: &FilterParams) -> Vec<&Product> {
        filter(&self.products, params)
    }

    /// Category dropdown options.
    pub fn categories(&self) -> Vec<String> {
        distinct_values(&self.products, fields::CATEGORY)
    }

    /// Brand dropdown options.
    pub fn brands(&self) -> Vec<String> {
        distinct_values(&self.products, fields::BRAND)
    }
}

impl From<ParsedCsv> for Catalog {
    fn from(parsed: ParsedCsv) -> Self {
        Self {
            headers: parsed.headers,
            dropped_rows: parsed.dropped.len(),
            products: parsed.products,
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
