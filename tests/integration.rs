use pagesnap::{BrowserConfig, HeadlessBrowser, PageFetcher, PageResult};

#[tokio::test]
async fn test_fetch_title_and_body() {
    let fetcher = PageFetcher::new(BrowserConfig::default());
    let result = fetcher
        .fetch("data:text/html,<title>He%20said%20%22hi%22</title><body><p>Ok</p></body>")
        .await;

    assert_eq!(result.title, "He said 'hi'");
    assert_eq!(result.body, "<p>Ok</p>");

    let json = serde_json::to_string(&result).expect("Failed to serialize");
    assert_eq!(json, r#"{"title":"He said 'hi'","body":"<p>Ok</p>"}"#);
}

#[tokio::test]
async fn test_fetch_empty_body() {
    let fetcher = PageFetcher::new(BrowserConfig::default());
    let result = fetcher
        .fetch("data:text/html,<title>Empty</title><body></body>")
        .await;

    assert_eq!(result.title, "Empty");
    assert_eq!(result.body, "");
    assert!(!result.is_error());
}

#[tokio::test]
async fn test_fetch_unreachable_url_reports_sentinel() {
    let fetcher = PageFetcher::new(BrowserConfig::default());
    // Port 1 is essentially guaranteed to refuse the connection.
    let result = fetcher.fetch("http://127.0.0.1:1/").await;

    assert_eq!(result, PageResult::sentinel());
    assert_eq!(
        serde_json::to_string(&result).expect("Failed to serialize"),
        r#"{"title":"ERROR","body":""}"#
    );
}

#[tokio::test]
async fn test_fetch_malformed_url_reports_sentinel() {
    let fetcher = PageFetcher::new(BrowserConfig::default());
    let result = fetcher.fetch("not a url at all").await;

    assert_eq!(result, PageResult::sentinel());
}

#[tokio::test]
async fn test_fetch_missing_argument_equivalent() {
    // The CLI maps a missing argument to an empty URL string.
    let fetcher = PageFetcher::new(BrowserConfig::default());
    let result = fetcher.fetch("").await;

    assert_eq!(result, PageResult::sentinel());
}

#[tokio::test]
async fn test_inner_html_vs_inner_text() {
    let browser = HeadlessBrowser::builder()
        .headless(true)
        .build()
        .await
        .expect("Failed to launch browser");

    let page = browser.new_page().await.expect("Failed to open page");
    page.goto("data:text/html,<body><p>Ok</p></body>")
        .await
        .expect("Failed to navigate");

    let url = page.url().await.expect("Failed to get URL");
    assert!(url.starts_with("data:"), "URL was: {url}");

    let html = page.inner_html("body").await.expect("Failed to get HTML");
    assert_eq!(html, "<p>Ok</p>");

    let text = page.inner_text("body").await.expect("Failed to get text");
    assert_eq!(text, "Ok");

    browser.close().await;
}

#[tokio::test]
async fn test_fetch_body_with_quoted_attributes() {
    let fetcher = PageFetcher::new(BrowserConfig::default());
    let result = fetcher
        .fetch("data:text/html,<title>T</title><body><a href=%22/x%22>link</a></body>")
        .await;

    assert!(!result.is_error());
    assert!(!result.body.contains('"'), "Body was: {}", result.body);
    assert!(result.body.contains("link"));
}
