// Fetcher - network retrieval + HTML-to-text for pattern searches
//
// The refresh engine talks to the network through the `PageFetcher` trait so
// tests can substitute canned pages. `HttpFetcher` is the real one: a single
// blocking reqwest client with a bounded timeout and a fixed User-Agent.

use std::time::Duration;

use scraper::Html;

use crate::error::FetchError;

/// Fixed identifying request header sent with every retrieval.
pub const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; deposit-radar/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Per-request network timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

// ============================================================================
// PAGE CONTENT
// ============================================================================

/// Fetched page body, flattened to searchable visible text.
#[derive(Debug, Clone)]
pub struct PageContent {
    text: String,
}

impl PageContent {
    /// Parse an HTML body and flatten it to whitespace-joined text.
    pub fn from_html(body: &str) -> Self {
        let document = Html::parse_document(body);
        let text = document
            .root_element()
            .text()
            .collect::<Vec<_>>()
            .join(" ");
        PageContent { text }
    }

    /// Wrap already-plain text. Used by tests and non-HTML sources.
    pub fn from_text(text: impl Into<String>) -> Self {
        PageContent { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

// ============================================================================
// FETCHER
// ============================================================================

/// Seam between the row updater and the network.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<PageContent, FetchError>;
}

/// Real fetcher backed by a blocking reqwest client.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<PageContent, FetchError> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        Ok(PageContent::from_html(&body))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_html_flattens_visible_text() {
        let page = PageContent::from_html(
            "<html><body><h1>Simple Plus</h1><p>Projected 3.60% p.a.</p></body></html>",
        );

        assert!(page.text().contains("Simple Plus"));
        assert!(page.text().contains("Projected 3.60%"));
    }

    #[test]
    fn test_from_html_splits_across_elements() {
        let page = PageContent::from_html("<p><b>Projected</b> 3.60%</p>");

        // Text nodes are joined with whitespace, never concatenated raw
        assert!(page.text().contains("Projected"));
        assert!(page.text().contains("3.60%"));
    }

    #[test]
    fn test_from_text_passthrough() {
        let page = PageContent::from_text("Guaranteed 2.45%");
        assert_eq!(page.text(), "Guaranteed 2.45%");
    }
}
