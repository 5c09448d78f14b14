use pagesnap::{BrowserConfig, PageFetcher};

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout carries exactly one JSON line.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // One positional argument, the URL. A missing argument becomes an empty
    // URL, which fails navigation and reports the sentinel like any other
    // failure.
    let url = std::env::args().nth(1).unwrap_or_default();

    let fetcher = PageFetcher::new(BrowserConfig::default());
    let result = fetcher.fetch(&url).await;

    // Serializing two strings cannot realistically fail; keep the contract
    // (valid JSON, exit 0) even if it somehow does.
    let line = serde_json::to_string(&result)
        .unwrap_or_else(|_| r#"{"title":"ERROR","body":""}"#.to_string());
    println!("{line}");
}
