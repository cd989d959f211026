// src/config/consts.rs

// Input / output
pub const DEFAULT_PRODUCTS_FILE: &str = "products.csv";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_HISTORY_FILE: &str = "price_history.csv";
pub const DEFAULT_LOG_FILE: &str = "debug.log";
pub const DEFAULT_SCREENSHOT_DIR: &str = "screenshots";

// Browser
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
pub const DEFAULT_WAIT_SECS: u64 = 6; // settle time after page load
pub const WINDOW_SIZE: (u32, u32) = (1400, 900);
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) \
    Chrome/120.0.0.0 Safari/537.36";

// HTTP backend
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Page layout. Amazon-style product pages; tried in order, first hit wins.
pub const TITLE_SELECTORS: &[&str] = &["#productTitle"];
pub const PRICE_SELECTORS: &[&str] = &[
    "span.a-price > span.a-offscreen", // common
    "#priceblock_ourprice",
    "#priceblock_dealprice",
    "#priceblock_saleprice",
    "#corePriceDisplay_desktop_feature_div span.a-price span.a-offscreen",
];

// Console
pub const TITLE_PREVIEW_CHARS: usize = 80;
