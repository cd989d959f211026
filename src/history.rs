// src/history.rs
// Append-only price history log (CSV). One row per product per run.

use std::fmt;
use std::fs::OpenOptions;
use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::file::ensure_parent_dir;

pub const HEADERS: [&str; 8] = [
    "timestamp", "name", "url", "title", "price", "raw_price_text", "target_price", "status",
];

pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ok,
    TargetReached,
    PriceNotFound,
}

impl Status {
    /// Status for a parsed price against an optional target.
    pub fn evaluate(price: Option<Decimal>, target: Option<Decimal>) -> Self {
        match (price, target) {
            (None, _) => Status::PriceNotFound,
            (Some(p), Some(t)) if p <= t => Status::TargetReached,
            _ => Status::Ok,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::TargetReached => "TARGET_REACHED",
            Status::PriceNotFound => "PRICE_NOT_FOUND (possible CAPTCHA/blocked or different layout)",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Status {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

/// Outcome of fetching and parsing one product at one point in time.
/// Field order is the column order of the history file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub timestamp: String,
    pub name: String,
    pub url: String,
    pub title: String,
    pub price: Option<Decimal>,
    pub raw_price_text: String,
    pub target_price: Option<Decimal>,
    pub status: Status,
}

/// Appends observations to the history file, writing the header only when the
/// file is new (or empty).
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn append(&self, obs: &Observation) -> Result<(), Box<dyn std::error::Error>> {
        ensure_parent_dir(&self.path)?;
        let fresh = std::fs::metadata(&self.path).map(|m| m.len() == 0).unwrap_or(true);

        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut w = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        if fresh {
            w.write_record(HEADERS)?;
        }
        w.serialize(obs)?;
        w.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(n: i64, scale: u32) -> Option<Decimal> {
        Some(Decimal::new(n, scale))
    }

    #[test]
    fn status_rules() {
        assert_eq!(Status::evaluate(None, d(1000, 2)), Status::PriceNotFound);
        assert_eq!(Status::evaluate(d(999, 2), d(1000, 2)), Status::TargetReached);
        assert_eq!(Status::evaluate(d(1000, 2), d(10, 0)), Status::TargetReached);
        assert_eq!(Status::evaluate(d(1200, 2), d(1000, 2)), Status::Ok);
        assert_eq!(Status::evaluate(d(1, 0), None), Status::Ok);
    }

    #[test]
    fn header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.csv");
        let log = HistoryLog::new(&path);
        let obs = Observation {
            timestamp: s!("2026-01-02 03:04:05"),
            name: s!("Mug, large"),
            url: s!("https://shop.test/mug"),
            title: s!("Mug"),
            price: d(1250, 2),
            raw_price_text: s!("$12.50"),
            target_price: None,
            status: Status::Ok,
        };
        log.append(&obs).unwrap();
        log.append(&Observation { price: None, status: Status::PriceNotFound, ..obs.clone() }).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADERS.join(","));
        assert_eq!(lines[1], "2026-01-02 03:04:05,\"Mug, large\",https://shop.test/mug,Mug,12.50,$12.50,,OK");
        assert!(lines[2].contains(",,$12.50,,PRICE_NOT_FOUND"));
    }
}
