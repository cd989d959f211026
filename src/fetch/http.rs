// src/fetch/http.rs
// Static HTTP backend: GET the page, parse the HTML, no JavaScript.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use super::{FetchError, HtmlDocument, PageFetcher};
use crate::config::{consts::HTTP_TIMEOUT_SECS, RunOptions};

pub struct HttpFetcher {
    client: Client,
    page: Option<HtmlDocument>,
}

impl HttpFetcher {
    pub fn new(opts: &RunOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(opts.user_agent.as_str())
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, page: None })
    }
}

impl PageFetcher for HttpFetcher {
    fn open(&mut self, url: &str) -> Result<(), FetchError> {
        // never answer queries from the previous page
        self.page = None;
        let resp = self.client.get(url).send()?.error_for_status()?;
        let body = resp.text()?;
        debug!("http: {} bytes from {url}", body.len());
        self.page = Some(HtmlDocument::parse(&body));
        Ok(())
    }

    fn text(&mut self, css: &str) -> Result<String, FetchError> {
        self.page.as_ref().ok_or(FetchError::NoPage)?.text(css)
    }

    fn screenshot(&mut self) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Unsupported("the http backend cannot take screenshots"))
    }

    fn close(&mut self) -> Result<(), FetchError> {
        self.page = None;
        Ok(())
    }
}
