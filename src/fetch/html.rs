// src/fetch/html.rs
use scraper::{Html, Selector};

use super::FetchError;
use crate::core::sanitize::normalize_ws;

/// Parsed static HTML page, queried with CSS selectors.
pub struct HtmlDocument {
    doc: Html,
}

impl HtmlDocument {
    pub fn parse(body: &str) -> Self {
        Self { doc: Html::parse_document(body) }
    }

    /// Whitespace-collapsed text of the first match.
    pub fn text(&self, css: &str) -> Result<String, FetchError> {
        let sel = Selector::parse(css).map_err(|e| FetchError::Selector(format!("`{css}`: {e}")))?;
        self.doc
            .select(&sel)
            .next()
            .map(|el| normalize_ws(&el.text().collect::<String>()))
            .ok_or_else(|| FetchError::NotFound(s!(css)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <span id="productTitle">
             Stainless   Kettle 1.7L
          </span>
          <span class="a-price"><span class="a-offscreen">$34.99</span><span aria-hidden="true">$34<sup>99</sup></span></span>
        </body></html>
    "#;

    #[test]
    fn first_match_text_is_collapsed() {
        let doc = HtmlDocument::parse(PAGE);
        assert_eq!(doc.text("#productTitle").unwrap(), "Stainless Kettle 1.7L");
        assert_eq!(doc.text("span.a-price > span.a-offscreen").unwrap(), "$34.99");
    }

    #[test]
    fn missing_and_invalid_selectors() {
        let doc = HtmlDocument::parse(PAGE);
        assert!(matches!(doc.text("#priceblock_ourprice"), Err(FetchError::NotFound(_))));
        assert!(matches!(doc.text("span[["), Err(FetchError::Selector(_))));
    }
}
