use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::browser::HeadlessBrowser;
use crate::config::BrowserConfig;
use crate::error::Result;

/// Replace every double quote with a single quote. Cosmetic sanitation of
/// extracted strings, not escaping; idempotent since the output contains no
/// double quotes to replace.
pub fn sanitize_quotes(s: &str) -> String {
    s.replace('"', "'")
}

/// The outcome of one fetch: the page title and the body element's inner
/// HTML, both quote-sanitized. Field order matters for the emitted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub title: String,
    pub body: String,
}

impl PageResult {
    /// Build a result, sanitizing both fields so neither ever carries a
    /// double quote.
    pub fn new(title: &str, body: &str) -> Self {
        Self {
            title: sanitize_quotes(title),
            body: sanitize_quotes(body),
        }
    }

    /// The fixed value reported for any internal failure.
    pub fn sentinel() -> Self {
        Self {
            title: "ERROR".into(),
            body: String::new(),
        }
    }

    /// Whether this result is the failure sentinel. Exit status does not
    /// distinguish success from failure, so callers inspect this instead.
    pub fn is_error(&self) -> bool {
        self.title == "ERROR" && self.body.is_empty()
    }
}

/// Fetches a single page: launch browser, open a tab, navigate, read title
/// and body HTML, release the browser. Every failure collapses to the
/// sentinel result; `fetch` itself never fails.
pub struct PageFetcher {
    config: BrowserConfig,
}

impl PageFetcher {
    pub fn new(config: BrowserConfig) -> Self {
        Self { config }
    }

    /// Fetch `url` and return its sanitized title and body HTML, or the
    /// sentinel on any failure. The URL is handed to navigation as-is; a
    /// malformed URL is just a navigation failure. The browser is closed
    /// after the outcome is resolved, on the success and failure paths
    /// alike.
    pub async fn fetch(&self, url: &str) -> PageResult {
        let browser = match HeadlessBrowser::launch(self.config.clone()).await {
            Ok(browser) => browser,
            Err(e) => {
                warn!(error = %e, url, "browser launch failed");
                return PageResult::sentinel();
            }
        };

        let outcome = Self::extract(&browser, url).await;
        browser.close().await;

        match outcome {
            Ok(result) => result,
            Err(e) => {
                // The cause is logged here and nowhere else; the reported
                // result stays the bare sentinel.
                warn!(error = %e, url, "page fetch failed");
                PageResult::sentinel()
            }
        }
    }

    async fn extract(browser: &HeadlessBrowser, url: &str) -> Result<PageResult> {
        let page = browser.new_page().await?;
        page.goto(url).await?;
        let title = page.title().await?;
        // Raw body markup, not rendered text.
        let body = page.inner_html("body").await?;
        Ok(PageResult::new(&title, &body))
    }
}
