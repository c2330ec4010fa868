//! Product records, CSV ingestion, and catalog filtering.
//!
//! This crate turns the raw text of a hand-maintained `products.csv` into an
//! immutable [`Catalog`] and answers the questions a listing page asks of
//! it: which products match the current search, category, and brand, and
//! which categories and brands exist at all.
//!
//! # Modules
//!
//! - [`parser`]: Quote-aware line splitting and record construction
//! - [`product`]: The [`Product`] record and well-known field names
//! - [`store`]: [`Catalog`], [`FilterParams`], and option derivation
//! - [`export`]: Writing records back out as CSV
//!
//! # Example
//!
//! ```rust
//! use vitrina_catalog::{Catalog, FilterParams};
//!
//! let text = "ID,Product Name,Product Type,Brand,Selling Price CRC,Presentation\n\
//!             1,Hydra Serum,Skin Care,Nivea,₡8500,30 ml\n\
//!             2,Body Lotion,Body,Eucerin,₡9900,400 ml\n";
//! let catalog = Catalog::from_csv(text);
//!
//! let params = FilterParams::default().with_search("SERUM");
//! let hits = catalog.filter(&params);
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].name(), "Hydra Serum");
//! assert_eq!(catalog.brands(), vec!["Eucerin", "Nivea"]);
//! ```

pub mod parser;
pub mod export;
pub mod product;
pub mod store;

mod proptests;

pub use parser::{ParsedCsv, parse_csv, split_csv_line};
pub use export::write_csv;
pub use product::{Product, fields};
pub use store::{Catalog, FilterParams, distinct_values, filter};
