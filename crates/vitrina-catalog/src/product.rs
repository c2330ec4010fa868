//! The product record.
//!
//! A [`Product`] is one accepted CSV row: the header names of its file
//! paired with the row's trimmed values, in column order. Records are never
//! mutated after parsing.

use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Column names the pipeline reads.
pub mod fields {
    /// Product identifier; drives image filenames and detail URLs.
    pub const ID: &str = "ID";
    /// Display name.
    pub const NAME: &str = "Product Name";
    /// Category, used by the category filter.
    pub const CATEGORY: &str = "Product Type";
    /// Brand, used by the brand filter.
    pub const BRAND: &str = "Brand";
    /// Price, shown verbatim.
    pub const PRICE: &str = "Selling Price CRC";
    /// Size/presentation, e.g. "30 ml".
    pub const PRESENTATION: &str = "Presentation";
    /// Optional long description (detail page only).
    pub const DESCRIPTION: &str = "Description";
    /// Optional photo reference carried by some catalogs.
    pub const PHOTO: &str = "Product Photo";

    /// Columns every catalog is expected to carry.
    pub const REQUIRED: [&str; 6] = [ID, NAME, CATEGORY, BRAND, PRICE, PRESENTATION];
}

/// One product, as a header → value mapping.
///
/// Header names are shared between all products of a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    headers: Arc<[String]>,
    values: Vec<String>,
}

impl Product {
    /// Build a record from shared headers and a row of equal length.
    ///
    /// Returns `None` when the lengths differ.
    pub fn new(headers: Arc<[String]>, values: Vec<String>) -> Option<Self> {
        (headers.len() == values.len()).then_some(Self { headers, values })
    }

    /// Value of a column, if the column exists.
    ///
    /// When a header name repeats, the rightmost column wins.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.headers
            .iter()
            .rposition(|h| h == field)
            .map(|i| self.values[i].as_str())
    }

    /// Value of a column, or `""` when the column is absent.
    pub fn field(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Product id.
    pub fn id(&self) -> &str {
        self.field(fields::ID)
    }

    /// Product name.
    pub fn name(&self) -> &str {
        self.field(fields::NAME)
    }

    /// Category (`Product Type`).
    pub fn category(&self) -> &str {
        self.field(fields::CATEGORY)
    }

    /// Brand.
    pub fn brand(&self) -> &str {
        self.field(fields::BRAND)
    }

    /// Price text. Never parsed or reformatted.
    pub fn price(&self) -> &str {
        self.field(fields::PRICE)
    }

    /// Presentation/size.
    pub fn presentation(&self) -> &str {
        self.field(fields::PRESENTATION)
    }

    /// Description, when the column exists and the cell is non-empty.
    pub fn description(&self) -> Option<&str> {
        self.get(fields::DESCRIPTION).filter(|d| !d.is_empty())
    }

    /// Header names, in column order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Values, in column order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// `(header, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.headers
            .iter()
            .zip(self.values.iter())
            .map(|(h, v)| (h.as_str(), v.as_str()))
    }
}

impl Serialize for Product {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (header, value) in self.iter() {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}
