use chromiumoxide::element::Element as CrElement;

use crate::error::{Error, Result};

/// Wrapper around a chromiumoxide Element.
pub struct Element {
    inner: CrElement,
}

impl Element {
    pub(crate) fn new(inner: CrElement) -> Self {
        Self { inner }
    }

    /// Get the inner HTML of this element. An element with no content
    /// (e.g. an empty `<body>`) yields an empty string, not an error.
    pub async fn inner_html(&self) -> Result<String> {
        Ok(self
            .inner
            .inner_html()
            .await
            .map_err(Error::CdpError)?
            .unwrap_or_default())
    }

    /// Get the rendered text of this element. Empty content yields an
    /// empty string.
    pub async fn inner_text(&self) -> Result<String> {
        Ok(self
            .inner
            .inner_text()
            .await
            .map_err(Error::CdpError)?
            .unwrap_or_default())
    }
}
