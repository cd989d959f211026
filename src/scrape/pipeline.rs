// src/scrape/pipeline.rs
// One pass over the product list: open, settle, screenshot, read, log.
// Nothing that goes wrong with a single product stops the run.

use std::path::PathBuf;
use std::thread;

use chrono::{DateTime, Local};
use tracing::{info, warn};

use super::first_non_empty;
use crate::{
    config::RunOptions,
    core::normalize_price,
    error::{Error, Result},
    fetch::{self, PageFetcher, Session},
    file::{ensure_directory, ensure_parent_dir, screenshot_path, write_screenshot},
    history::{HistoryLog, Observation, Status, TIMESTAMP_FMT},
    products::{load_products, ProductEntry},
    progress::Progress,
};

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub observations: Vec<Observation>,
    pub history_path: PathBuf,
    pub screenshots: Vec<PathBuf>,
    /// Rows that could not be appended to the history file.
    pub unsaved: usize,
}

impl RunSummary {
    pub fn count(&self, status: Status) -> usize {
        self.observations.iter().filter(|o| o.status == status).count()
    }
}

/// Full run with the backend from `opts`. Input problems are reported before
/// any browser is started.
pub fn run(opts: &RunOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let products = prepare(opts)?;
    let fetcher = fetch::connect(opts).map_err(Error::Fetcher)?;
    Ok(observe_all(opts, &products, Session::new(fetcher), progress))
}

/// Same as `run`, with a caller-supplied fetcher. The fetcher is closed on
/// every path, including input errors.
pub fn run_with<F: PageFetcher>(
    opts: &RunOptions,
    fetcher: F,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let session = Session::new(fetcher);
    let products = prepare(opts)?;
    Ok(observe_all(opts, &products, session, progress))
}

fn prepare(opts: &RunOptions) -> Result<Vec<ProductEntry>> {
    let products = load_products(&opts.products_path)?;
    if products.is_empty() {
        return Err(Error::NoProducts(opts.products_path.clone()));
    }
    ensure_directory(&opts.screenshot_dir)?;
    ensure_parent_dir(&opts.history_path)?;
    info!("run: {} products from {}", products.len(), opts.products_path.display());
    Ok(products)
}

fn observe_all<F: PageFetcher>(
    opts: &RunOptions,
    products: &[ProductEntry],
    mut session: Session<F>,
    mut progress: Option<&mut dyn Progress>,
) -> RunSummary {
    let history = HistoryLog::new(&opts.history_path);
    let total = products.len();
    let mut summary = RunSummary {
        observations: Vec::with_capacity(total),
        history_path: opts.history_path.clone(),
        screenshots: Vec::new(),
        unsaved: 0,
    };

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
    }

    for (i, product) in products.iter().enumerate() {
        let index = i + 1;
        if let Some(p) = progress.as_deref_mut() {
            p.item_started(index, total, product);
        }

        let now = Local::now();
        let (obs, shot) = observe(session.fetcher(), opts, index, product, &now);

        if let Some(path) = shot {
            if let Some(p) = progress.as_deref_mut() {
                p.screenshot_saved(&path);
            }
            summary.screenshots.push(path);
        }

        if let Err(e) = history.append(&obs) {
            warn!("history: could not append row for {}: {e}", product.url);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Could not write history row: {e}"));
            }
            summary.unsaved += 1;
        }

        info!("[{index}/{total}] {} -> {} ({})", product.url, obs.status, obs.raw_price_text);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(index, &obs);
        }
        summary.observations.push(obs);
    }

    if let Err(e) = session.finish() {
        warn!("fetch: closing session failed: {e}");
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    summary
}

/// Observe a single product on an already open fetcher. Returns the record and
/// the screenshot path if one was written.
pub fn observe<F: PageFetcher + ?Sized>(
    fetcher: &mut F,
    opts: &RunOptions,
    index: usize,
    product: &ProductEntry,
    now: &DateTime<Local>,
) -> (Observation, Option<PathBuf>) {
    let mut shot = None;

    let (title, raw_price_text) = match fetcher.open(&product.url) {
        Ok(()) => {
            thread::sleep(opts.wait);

            let path = screenshot_path(&opts.screenshot_dir, index, &product.name, now);
            match fetcher.screenshot() {
                Ok(bytes) => match write_screenshot(&path, &bytes) {
                    Ok(()) => shot = Some(path),
                    Err(e) => warn!("screenshot: could not save {}: {e}", path.display()),
                },
                Err(e) => warn!("screenshot: {} skipped: {e}", product.url),
            }

            let title = first_non_empty(&opts.title_selectors, |css| fetcher.text(css));
            let raw = first_non_empty(&opts.price_selectors, |css| fetcher.text(css));
            (title, raw)
        }
        Err(e) => {
            warn!("open: {} failed: {e}", product.url);
            (s!(), s!())
        }
    };

    let price = normalize_price(&raw_price_text);
    let status = Status::evaluate(price, product.target_price);

    let obs = Observation {
        timestamp: now.format(TIMESTAMP_FMT).to_string(),
        name: product.name.clone(),
        url: product.url.clone(),
        title,
        price,
        raw_price_text,
        target_price: product.target_price,
        status,
    };
    (obs, shot)
}
