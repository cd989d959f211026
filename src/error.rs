// src/error.rs
// Fatal errors only. Per-product trouble never becomes an Error; it ends up in
// the history row's status column instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::fetch::FetchError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{} not found. Create it first.", .0.display())]
    InputMissing(PathBuf),

    #[error("no products found in {}", .0.display())]
    NoProducts(PathBuf),

    #[error("failed to read {}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("could not start page fetcher")]
    Fetcher(#[source] FetchError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InputMissing(_) => 2,
            Error::NoProducts(_) => 3,
            _ => 1,
        }
    }
}
