// src/fetch/webdriver.rs
// Browser backend over WebDriver (chromedriver). fantoccini is async; a private
// current-thread runtime drives each call to completion so callers stay blocking.

use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use tokio::runtime::{Builder, Runtime};

use super::{FetchError, PageFetcher};
use crate::config::RunOptions;

pub struct WebDriverFetcher {
    rt: Runtime,
    client: Option<Client>,
}

impl WebDriverFetcher {
    /// Open a new Chrome session on the WebDriver server at `opts.webdriver_url`.
    pub fn connect(opts: &RunOptions) -> Result<Self, FetchError> {
        let rt = Builder::new_current_thread().enable_all().build()?;

        let mut caps = serde_json::Map::new();
        caps.insert(s!("goog:chromeOptions"), json!({ "args": opts.chrome_args() }));

        let mut builder = ClientBuilder::native();
        builder.capabilities(caps);
        let client = rt.block_on(builder.connect(&opts.webdriver_url))?;

        Ok(Self { rt, client: Some(client) })
    }

    fn client(&self) -> Result<&Client, FetchError> {
        self.client.as_ref().ok_or(FetchError::Closed)
    }
}

impl PageFetcher for WebDriverFetcher {
    fn open(&mut self, url: &str) -> Result<(), FetchError> {
        let client = self.client()?;
        self.rt.block_on(client.goto(url))?;
        Ok(())
    }

    fn text(&mut self, css: &str) -> Result<String, FetchError> {
        let client = self.client()?;
        let text = self.rt.block_on(async {
            let el = client.find(Locator::Css(css)).await?;
            el.text().await
        })?;
        Ok(text.trim().to_string())
    }

    fn screenshot(&mut self) -> Result<Vec<u8>, FetchError> {
        let client = self.client()?;
        Ok(self.rt.block_on(client.screenshot())?)
    }

    fn close(&mut self) -> Result<(), FetchError> {
        if let Some(client) = self.client.take() {
            self.rt.block_on(client.close())?;
        }
        Ok(())
    }
}
