//! Catalog CSV parsing.
//!
//! The catalog file is hand-maintained in a spreadsheet and exported as
//! plain comma-separated text. The dialect is deliberately small:
//!
//! - the first line holds header names, split on every comma;
//! - `"` toggles quoted mode and is never part of a value;
//! - a comma separates fields only outside quoted mode;
//! - there is no escape for a literal quote.
//!
//! Rows whose field count differs from the header count are dropped. The
//! drop is logged at `debug` and counted in [`ParsedCsv::dropped`].

use std::sync::Arc;

use log::debug;

use crate::product::Product;

/// Result of parsing a catalog file.
#[derive(Debug, Clone, Default)]
pub struct ParsedCsv {
    /// Header names, trimmed, in column order.
    pub headers: Arc<[String]>,
    /// Accepted rows, in file order.
    pub products: Vec<Product>,
    /// Line numbers (1-based, header is line 1) of rows that were dropped.
    pub dropped: Vec<usize>,
}

impl ParsedCsv {
    /// Number of accepted rows.
    pub fn accepted(&self) -> usize {
        self.products.len()
    }
}

/// Split one data line into raw (untrimmed) fields.
///
/// # Examples
///
/// ```
/// use vitrina_catalog::split_csv_line;
///
/// assert_eq!(split_csv_line(r#"A,"B,C",D"#), vec!["A", "B,C", "D"]);
/// assert_eq!(split_csv_line(r#"say "hi", there"#), vec!["say hi", " there"]);
/// ```
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Parse catalog text into product records.
///
/// Never fails: text with no header line yields an empty result, and rows
/// with the wrong number of fields are skipped.
pub fn parse_csv(text: &str) -> ParsedCsv {
    let mut lines = text.trim().split('\n');

    let headers: Arc<[String]> = match lines.next() {
        Some(line) if !line.trim().is_empty() => {
            line.split(',').map(|h| h.trim().to_string()).collect()
        }
        _ => return ParsedCsv::default(),
    };

    let mut products = Vec::new();
    let mut dropped = Vec::new();

    for (offset, line) in lines.enumerate() {
        let line_no = offset + 2;
        let values: Vec<String> = split_csv_line(line)
            .into_iter()
            .map(|v| v.trim().to_string())
            .collect();

        let found = values.len();
        match Product::new(Arc::clone(&headers), values) {
            Some(product) => products.push(product),
            None => {
                debug!(
                    "Dropping CSV line {}: {} fields, expected {}",
                    line_no,
                    found,
                    headers.len()
                );
                dropped.push(line_no);
            }
        }
    }

    debug!(
        "Parsed {} products ({} rows dropped)",
        products.len(),
        dropped.len()
    );

    ParsedCsv {
        headers,
        products,
        dropped,
    }
}
