pub mod browser;
pub mod config;
pub mod element;
pub mod error;
pub mod fetcher;
pub mod page;

pub use browser::HeadlessBrowser;
pub use config::{BrowserBuilder, BrowserConfig};
pub use error::{Error, Result};
pub use fetcher::{PageFetcher, PageResult};
pub use page::Page;
