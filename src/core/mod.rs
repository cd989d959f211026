// src/core/mod.rs

pub mod price;
pub mod sanitize;

pub use price::normalize_price;
