//! Writing products back out as CSV.

use std::io::Write;

use vitrina_core::{Error, Result};

use crate::product::Product;

/// Write `products` as CSV with the given header row.
///
/// Values are looked up by header name, so products parsed from a file with
/// a different column order are written in `headers` order. Fields that
/// contain a comma are quoted; the catalog parser reads them back intact.
pub fn write_csv<'a, W, I>(writer: W, headers: &[String], products: I) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Product>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(headers)
        .map_err(|e| Error::write(format!("CSV header: {e}")))?;

    let mut count = 0;
    for product in products {
        let row = headers.iter().map(|h| product.field(h));
        wtr.write_record(row)
            .map_err(|e| Error::write(format!("CSV row for product {}: {e}", product.id())))?;
        count += 1;
    }

    wtr.flush()
        .map_err(|e| Error::write(format!("CSV flush: {e}")))?;
    log::debug!("Wrote {count} products as CSV");
    Ok(count)
}
