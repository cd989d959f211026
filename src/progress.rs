// src/progress.rs
use std::path::Path;

use crate::history::Observation;
use crate::products::ProductEntry;

/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to the operator.
pub trait Progress {
    /// Called at the start with the number of products.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A product's page is about to be opened. `index` is 1-based.
    fn item_started(&mut self, _index: usize, _total: usize, _product: &ProductEntry) {}

    fn screenshot_saved(&mut self, _path: &Path) {}

    /// The product's observation is final (and was handed to the history log).
    fn item_done(&mut self, _index: usize, _obs: &Observation) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
