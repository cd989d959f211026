// src/fetch/mod.rs
// Page fetch capability. The pipeline only sees `PageFetcher`; backends decide
// whether a page is a live browser tab or a parsed HTML snapshot.

mod html;
mod http;
mod webdriver;

pub use html::HtmlDocument;
pub use http::HttpFetcher;
pub use webdriver::WebDriverFetcher;

use thiserror::Error;
use tracing::{info, warn};

use crate::config::{Backend, RunOptions};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no page loaded")]
    NoPage,

    #[error("fetcher already closed")]
    Closed,

    #[error("no element matches `{0}`")]
    NotFound(String),

    #[error("invalid selector {0}")]
    Selector(String),

    #[error("{0}")]
    Unsupported(&'static str),

    #[error(transparent)]
    NewSession(#[from] fantoccini::error::NewSessionError),

    #[error(transparent)]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A single browsing context: one page open at a time.
pub trait PageFetcher {
    /// Load `url`, replacing whatever was open before.
    fn open(&mut self, url: &str) -> Result<(), FetchError>;

    /// Trimmed text of the first element matching a CSS selector.
    fn text(&mut self, css: &str) -> Result<String, FetchError>;

    /// Encoded image of the current page (PNG for the browser backend).
    fn screenshot(&mut self) -> Result<Vec<u8>, FetchError>;

    /// Release the underlying session. Further calls may fail.
    fn close(&mut self) -> Result<(), FetchError>;
}

impl<F: PageFetcher + ?Sized> PageFetcher for Box<F> {
    fn open(&mut self, url: &str) -> Result<(), FetchError> { (**self).open(url) }
    fn text(&mut self, css: &str) -> Result<String, FetchError> { (**self).text(css) }
    fn screenshot(&mut self) -> Result<Vec<u8>, FetchError> { (**self).screenshot() }
    fn close(&mut self) -> Result<(), FetchError> { (**self).close() }
}

/// Start the backend selected in `opts`.
pub fn connect(opts: &RunOptions) -> Result<Box<dyn PageFetcher>, FetchError> {
    match opts.backend {
        Backend::Webdriver => {
            info!("fetch: connecting to WebDriver at {}", opts.webdriver_url);
            Ok(Box::new(WebDriverFetcher::connect(opts)?))
        }
        Backend::Http => {
            info!("fetch: using plain HTTP backend");
            Ok(Box::new(HttpFetcher::new(opts)?))
        }
    }
}

/// Scoped ownership of a fetcher: closed by `finish`, or on drop if the run
/// bails out early.
pub struct Session<F: PageFetcher> {
    inner: F,
    closed: bool,
}

impl<F: PageFetcher> Session<F> {
    pub fn new(fetcher: F) -> Self {
        Self { inner: fetcher, closed: false }
    }

    pub fn fetcher(&mut self) -> &mut F {
        &mut self.inner
    }

    /// Close now and report the outcome.
    pub fn finish(mut self) -> Result<(), FetchError> {
        self.closed = true;
        self.inner.close()
    }
}

impl<F: PageFetcher> Drop for Session<F> {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Err(e) = self.inner.close() {
            warn!("fetch: closing session failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counting(Rc<Cell<u32>>);

    impl PageFetcher for Counting {
        fn open(&mut self, _url: &str) -> Result<(), FetchError> { Ok(()) }
        fn text(&mut self, css: &str) -> Result<String, FetchError> { Err(FetchError::NotFound(css.into())) }
        fn screenshot(&mut self) -> Result<Vec<u8>, FetchError> { Err(FetchError::Unsupported("test")) }
        fn close(&mut self) -> Result<(), FetchError> {
            self.0.set(self.0.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn finish_closes_once() {
        let closes = Rc::new(Cell::new(0));
        let mut s = Session::new(Counting(closes.clone()));
        s.fetcher().open("x").unwrap();
        s.finish().unwrap();
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn drop_closes_on_early_exit() {
        let closes = Rc::new(Cell::new(0));
        let run = || -> Result<(), FetchError> {
            let mut s = Session::new(Counting(closes.clone()));
            s.fetcher().text("#missing")?;
            s.finish()
        };
        assert!(run().is_err());
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn boxed_fetcher_delegates() {
        let closes = Rc::new(Cell::new(0));
        let boxed: Box<dyn PageFetcher> = Box::new(Counting(closes.clone()));
        Session::new(boxed).finish().unwrap();
        assert_eq!(closes.get(), 1);
    }
}
