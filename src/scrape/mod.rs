// src/scrape/mod.rs
mod lookup;
mod pipeline;

pub use lookup::first_non_empty;
pub use pipeline::{observe, run, run_with, RunSummary};
