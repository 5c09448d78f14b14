use chromiumoxide::browser::{Browser as CrBrowser, BrowserConfig as CrBrowserConfig};
use chromiumoxide::handler::viewport::Viewport;
use futures::StreamExt;
use tracing::debug;

use crate::config::BrowserConfig;
use crate::error::{Error, Result};
use crate::page::Page;

/// Chrome flags that cut startup and load time without changing what the
/// renderer produces.
const PERF_ARGS: &[&str] = &[
    "disable-gpu",
    "disable-extensions",
    "mute-audio",
    "no-default-browser-check",
    "disable-popup-blocking",
];

/// A launched headless Chrome instance together with its CDP event loop.
///
/// `close` consumes the handle, so the browser can only be released once;
/// callers that want release-on-all-paths hold the handle across the
/// fallible work and call `close` after the outcome is resolved.
pub struct HeadlessBrowser {
    browser: CrBrowser,
    handler_task: tokio::task::JoinHandle<()>,
}

impl HeadlessBrowser {
    /// Create a new BrowserBuilder for configuring and launching a browser.
    pub fn builder() -> crate::config::BrowserBuilder {
        crate::config::BrowserBuilder::new()
    }

    /// Launch a browser instance with the given configuration.
    pub async fn launch(config: BrowserConfig) -> Result<Self> {
        let mut builder = CrBrowserConfig::builder();

        if config.headless {
            builder = builder.new_headless_mode().no_sandbox();
        } else {
            builder = builder.with_head().no_sandbox();
        }

        for arg in PERF_ARGS {
            builder = builder.arg(*arg);
        }

        if let Some(ref path) = config.chrome_path {
            builder = builder.chrome_executable(path);
        }

        builder = builder.viewport(Viewport {
            width: config.viewport_width,
            height: config.viewport_height,
            device_scale_factor: None,
            emulating_mobile: false,
            is_landscape: false,
            has_touch: false,
        });

        let cr_config = builder
            .build()
            .map_err(|e| Error::LaunchError(e.to_string()))?;

        let (browser, mut handler) = CrBrowser::launch(cr_config)
            .await
            .map_err(|e| Error::LaunchError(e.to_string()))?;

        // The handler stream must be polled for the CDP connection to make
        // progress; it ends when the browser goes away.
        let handler_task = tokio::spawn(async move {
            while let Some(_event) = handler.next().await {}
        });

        Ok(Self {
            browser,
            handler_task,
        })
    }

    /// Open a new blank page (tab). Navigation is the caller's job.
    pub async fn new_page(&self) -> Result<Page> {
        let cr_page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(Error::CdpError)?;
        Ok(Page::new(cr_page))
    }

    /// Shut the browser down: graceful CDP close, reap the process, stop the
    /// event loop. Errors during teardown are logged and swallowed so close
    /// never masks the outcome of the work that preceded it.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            debug!(error = %e, "browser close request failed");
        }
        if let Err(e) = self.browser.wait().await {
            debug!(error = %e, "waiting for browser exit failed");
        }
        self.handler_task.abort();
    }
}
