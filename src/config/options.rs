// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// How pages are fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Backend {
    /// Drive a real browser through a WebDriver server (chromedriver).
    #[default]
    Webdriver,
    /// Plain HTTP GET + static HTML parsing. No JavaScript, no screenshots.
    Http,
}

/// Everything one run needs. Built once by the CLI and passed down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub products_path: PathBuf,
    pub history_path: PathBuf,
    pub screenshot_dir: PathBuf,

    pub backend: Backend,
    pub webdriver_url: String,
    pub headless: bool,
    pub user_agent: String,
    pub window_size: (u32, u32),

    /// Blocking pause after opening a page, before reading it.
    pub wait: Duration,

    pub title_selectors: Vec<String>,
    pub price_selectors: Vec<String>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            products_path: PathBuf::from(DEFAULT_PRODUCTS_FILE),
            history_path: PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_HISTORY_FILE),
            screenshot_dir: PathBuf::from(DEFAULT_SCREENSHOT_DIR),
            backend: Backend::default(),
            webdriver_url: s!(DEFAULT_WEBDRIVER_URL),
            headless: true,
            user_agent: s!(USER_AGENT),
            window_size: WINDOW_SIZE,
            wait: Duration::from_secs(DEFAULT_WAIT_SECS),
            title_selectors: TITLE_SELECTORS.iter().map(|s| s.to_string()).collect(),
            price_selectors: PRICE_SELECTORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl RunOptions {
    /// Chrome command-line switches for the WebDriver backend.
    pub fn chrome_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(6);
        if self.headless {
            args.push(s!("--headless=new"));
        }
        let (w, h) = self.window_size;
        args.push(format!("--user-agent={}", self.user_agent));
        args.push(format!("--window-size={w},{h}"));
        args.push(s!("--disable-blink-features=AutomationControlled"));
        args.push(s!("--no-sandbox"));
        args.push(s!("--disable-dev-shm-usage"));
        args
    }
}
