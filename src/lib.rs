// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fetch;
pub mod file;
pub mod history;
pub mod log;
pub mod products;
pub mod progress;
pub mod scrape;

pub use error::{Error, Result};
