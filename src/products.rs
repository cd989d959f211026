// src/products.rs
// Product list input: CSV with a header row `name,url,target_price`.

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::StringRecord;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{Error, Result};

pub const UNNAMED: &str = "Unnamed";

/// One product to observe. Immutable for the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductEntry {
    pub name: String,
    pub url: String,
    pub target_price: Option<Decimal>,
}

/// Where each known column sits in the header. Absent columns stay `None`.
#[derive(Debug, Default)]
struct Columns {
    name: Option<usize>,
    url: Option<usize>,
    target_price: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut cols = Columns::default();
        for (i, h) in headers.iter().enumerate() {
            match h.trim() {
                "name" => cols.name = Some(i),
                "url" => cols.url = Some(i),
                "target_price" => cols.target_price = Some(i),
                _ => {}
            }
        }
        cols
    }

    /// Cells past the end of a short row read as empty.
    fn cell<'r>(record: &'r StringRecord, idx: Option<usize>) -> &'r str {
        idx.and_then(|i| record.get(i)).map(str::trim).unwrap_or("")
    }

    fn entry(&self, record: &StringRecord) -> Option<ProductEntry> {
        let url = Self::cell(record, self.url);
        if url.is_empty() {
            return None;
        }
        let name = Self::cell(record, self.name);
        Some(ProductEntry {
            name: if name.is_empty() { s!(UNNAMED) } else { s!(name) },
            url: s!(url),
            target_price: parse_target(Self::cell(record, self.target_price)),
        })
    }
}

/// Empty or invalid target → no target.
fn parse_target(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s).ok()
}

/// Load the product list. A missing file is reported as such; rows without a
/// URL are skipped. Returning zero entries is not an error here.
pub fn load_products(path: &Path) -> Result<Vec<ProductEntry>> {
    if !path.exists() {
        return Err(Error::InputMissing(path.to_path_buf()));
    }
    let file = std::fs::File::open(path)?;
    read_products(file).map_err(|source| Error::Input { path: path.to_path_buf(), source })
}

pub fn read_products<R: Read>(input: R) -> std::result::Result<Vec<ProductEntry>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    // Surface a broken header as a hard error; bad rows are only skipped.
    let cols = Columns::from_headers(reader.headers()?);
    if cols.url.is_none() {
        warn!("products: no `url` column in header");
    }

    let mut out = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let line = idx + 2; // 1-based, after header
        match record {
            Ok(record) => match cols.entry(&record) {
                Some(entry) => out.push(entry),
                None => debug!("products: line {line} has no url, skipped"),
            },
            Err(e) => warn!("products: line {line} unreadable, skipped: {e}"),
        }
    }
    Ok(out)
}
