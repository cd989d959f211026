// src/cli.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use crate::config::consts::*;
use crate::config::{Backend, RunOptions};
use crate::core::sanitize::ellipsize;
use crate::history::{Observation, Status};
use crate::products::ProductEntry;
use crate::progress::Progress;
use crate::scrape::{self, RunSummary};

/// Track product prices: open each page, read title and price, append to a CSV history.
#[derive(Debug, Parser)]
#[command(name = "price_watch", version, about)]
pub struct Args {
    /// Product list (CSV with header: name,url,target_price)
    #[arg(short = 'i', long = "products", env = "PRICE_WATCH_PRODUCTS", default_value = DEFAULT_PRODUCTS_FILE)]
    pub products: PathBuf,

    /// History file to append to [default: data/price_history.csv]
    #[arg(short = 'o', long = "history", env = "PRICE_WATCH_HISTORY")]
    pub history: Option<PathBuf>,

    /// Directory for page screenshots
    #[arg(long = "screenshots", env = "PRICE_WATCH_SCREENSHOTS", default_value = DEFAULT_SCREENSHOT_DIR)]
    pub screenshots: PathBuf,

    /// How pages are fetched
    #[arg(long, value_enum, env = "PRICE_WATCH_BACKEND", default_value_t = Backend::Webdriver)]
    pub backend: Backend,

    /// WebDriver server (chromedriver) for the webdriver backend
    #[arg(long, env = "PRICE_WATCH_WEBDRIVER_URL", default_value = DEFAULT_WEBDRIVER_URL)]
    pub webdriver_url: String,

    /// Run the browser with a visible window
    #[arg(long, env = "PRICE_WATCH_SHOW_BROWSER")]
    pub show_browser: bool,

    /// Seconds to wait after opening each page
    #[arg(long, env = "PRICE_WATCH_WAIT", default_value_t = DEFAULT_WAIT_SECS)]
    pub wait: u64,

    /// User-Agent sent by the browser / HTTP client
    #[arg(long, env = "PRICE_WATCH_USER_AGENT", default_value = USER_AGENT)]
    pub user_agent: String,

    /// Debug log file [default: data/debug.log]
    #[arg(long, env = "PRICE_WATCH_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_LOG_FILE))
    }

    pub fn into_options(self) -> RunOptions {
        let defaults = RunOptions::default();
        RunOptions {
            products_path: self.products,
            history_path: self.history.unwrap_or(defaults.history_path),
            screenshot_dir: self.screenshots,
            backend: self.backend,
            webdriver_url: self.webdriver_url,
            headless: !self.show_browser,
            user_agent: self.user_agent,
            wait: Duration::from_secs(self.wait),
            ..defaults
        }
    }
}

/// Console progress, one block per product.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("  {msg}");
    }

    fn item_started(&mut self, index: usize, total: usize, product: &ProductEntry) {
        println!("\n[{index}/{total}] Opening: {}", product.url);
    }

    fn screenshot_saved(&mut self, path: &Path) {
        println!("  Screenshot saved: {}", path.display());
    }

    fn item_done(&mut self, _index: usize, obs: &Observation) {
        println!("  Title: {}", ellipsize(&obs.title, TITLE_PREVIEW_CHARS));
        println!("  Raw price: {}", obs.raw_price_text);
        match obs.price {
            Some(p) => println!("  Parsed price: {p}"),
            None => println!("  Parsed price: -"),
        }
        println!("  Status: {}", obs.status);
    }
}

/// CLI entry point: parse args, set up logging, run once.
pub fn run() -> crate::Result<RunSummary> {
    let args = Args::parse();
    if let Err(e) = crate::log::init(&args.log_path()) {
        eprintln!("Warning: file logging disabled: {e}");
    }

    let opts = args.into_options();
    let summary = scrape::run(&opts, Some(&mut ConsoleProgress))?;

    println!(
        "\n{} OK, {} at or below target, {} without price.",
        summary.count(Status::Ok),
        summary.count(Status::TargetReached),
        summary.count(Status::PriceNotFound),
    );
    println!(
        "Done. Check {} and {}/ folder.",
        summary.history_path.display(),
        opts.screenshot_dir.display()
    );
    if summary.unsaved > 0 {
        eprintln!("Warning: {} rows could not be written to the history file", summary.unsaved);
    }
    Ok(summary)
}
