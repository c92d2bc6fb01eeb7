//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end, down to the JSON file on disk.

use std::path::Path;
use tempfile::tempdir;
use web_sweep::config::{Config, DEFAULT_USER_AGENT};
use web_sweep::crawler::crawl;
use web_sweep::output::{read_records_json, PageRecord};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at the given seeds and results file
fn create_test_config(seeds: Vec<String>, max_pages: usize, results_path: &Path) -> Config {
    let mut config = Config::default();
    config.seeds = seeds;
    config.crawler.max_pages = max_pages;
    config.crawler.timeout_secs = 5;
    config.output.results_path = results_path.display().to_string();
    config
}

fn html_page(title: &str, description: &str, body: &str) -> String {
    format!(
        r#"<html><head><title>{}</title><meta name="description" content="{}"></head><body>{}</body></html>"#,
        title, description, body
    )
}

async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page(
            "Home",
            "The home page",
            r##"<a href="/page1">Page 1</a>
                <a href="page2#intro">Page 2</a>
                <a href="mailto:someone@example.com">Mail</a>
                <a href="/page1">Page 1 again</a>"##,
        ),
    )
    .await;
    mount_page(&mock_server, "/page1", html_page("Page 1", "First", r#"<a href="/">Home</a>"#)).await;
    mount_page(&mock_server, "/page2", html_page("Page 2", "Second", "")).await;

    let dir = tempdir().unwrap();
    let results_path = dir.path().join("output").join("web_crawl_results.json");
    let config = create_test_config(vec![format!("{}/", base_url)], 100, &results_path);

    let report = crawl(config).await.expect("Crawl failed");

    let expected = vec![
        PageRecord::new(format!("{}/", base_url), "Home", "The home page"),
        PageRecord::new(format!("{}/page1", base_url), "Page 1", "First"),
        PageRecord::new(format!("{}/page2", base_url), "Page 2", "Second"),
    ];
    assert_eq!(report.records, expected);
    assert_eq!(report.visited.len(), 3);

    let saved = read_records_json(&results_path).expect("Failed to read results");
    assert_eq!(saved, expected);
}

#[tokio::test]
async fn test_budget_with_server_error() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let a = format!("{}/a", base_url);
    let b = format!("{}/b", base_url);

    mount_page(
        &mock_server,
        "/a",
        html_page(
            "A",
            "",
            &format!(r#"<a href="{}">B</a><a href="{}">A</a>"#, b, a),
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/b"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let results_path = dir.path().join("results.json");
    let config = create_test_config(vec![a.clone()], 2, &results_path);

    let report = crawl(config).await.expect("Crawl failed");

    assert_eq!(report.records, vec![PageRecord::new(a.clone(), "A", "")]);
    assert!(report.visited.contains(&a));
    assert!(report.visited.contains(&b));
    assert_eq!(report.visited.len(), 2);

    let saved = read_records_json(&results_path).unwrap();
    assert_eq!(saved.len(), 1);
}

#[tokio::test]
async fn test_empty_seed_list_writes_empty_array() {
    let mock_server = MockServer::start().await;

    let dir = tempdir().unwrap();
    let results_path = dir.path().join("results.json");
    let config = create_test_config(vec![], 100, &results_path);

    let report = crawl(config).await.expect("Crawl failed");

    assert!(report.records.is_empty());
    assert_eq!(std::fs::read_to_string(&results_path).unwrap(), "[]");

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_client_error_page_is_recorded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(html_page("Not Found", "Missing page", ""))
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let results_path = dir.path().join("results.json");
    let seed = format!("{}/gone", mock_server.uri());
    let config = create_test_config(vec![seed.clone()], 10, &results_path);

    let report = crawl(config).await.expect("Crawl failed");

    assert_eq!(
        report.records,
        vec![PageRecord::new(seed, "Not Found", "Missing page")]
    );
}

#[tokio::test]
async fn test_unreachable_seed_is_an_empty_successful_run() {
    let dir = tempdir().unwrap();
    let results_path = dir.path().join("results.json");
    // Nothing listens on port 9 of localhost in the test environment
    let config = create_test_config(vec!["http://127.0.0.1:9/".to_string()], 10, &results_path);

    let report = crawl(config).await.expect("Crawl failed");

    assert!(report.records.is_empty());
    assert_eq!(report.visited.len(), 1);
    assert_eq!(report.statistics.fetch_failures, 1);
    assert_eq!(std::fs::read_to_string(&results_path).unwrap(), "[]");
}

#[tokio::test]
async fn test_user_agent_header_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string(html_page("UA", "", "")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempdir().unwrap();
    let results_path = dir.path().join("results.json");
    let config = create_test_config(vec![format!("{}/", mock_server.uri())], 10, &results_path);

    let report = crawl(config).await.expect("Crawl failed");
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records[0].title, "UA");
}

#[tokio::test]
async fn test_unicode_written_unescaped() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        html_page("Café – 東京", "Ünïcödé description", ""),
    )
    .await;

    let dir = tempdir().unwrap();
    let results_path = dir.path().join("results.json");
    let config = create_test_config(vec![format!("{}/", mock_server.uri())], 10, &results_path);

    crawl(config).await.expect("Crawl failed");

    let content = std::fs::read_to_string(&results_path).unwrap();
    assert!(content.contains("Café – 東京"));
    assert!(content.contains("Ünïcödé description"));
    assert!(content.starts_with("[\n  {\n    \"url\""));
}

#[tokio::test]
async fn test_concurrent_crawl_fetches_each_page_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let all_links: String = (0..8)
        .map(|i| format!(r#"<a href="/p{}">{}</a>"#, i, i))
        .collect();

    mount_page(&mock_server, "/", html_page("Root", "", &all_links)).await;
    for i in 0..8 {
        mount_page(
            &mock_server,
            &format!("/p{}", i),
            html_page(&format!("P{}", i), "", &all_links),
        )
        .await;
    }

    let dir = tempdir().unwrap();
    let results_path = dir.path().join("results.json");
    let mut config = create_test_config(vec![format!("{}/", base_url)], 100, &results_path);
    config.crawler.max_concurrent = 4;

    let report = crawl(config).await.expect("Crawl failed");

    assert_eq!(report.records.len(), 9);
    assert_eq!(report.records[0].title, "Root");
    let titles: Vec<_> = report.records[1..].iter().map(|r| r.title.clone()).collect();
    let expected: Vec<_> = (0..8).map(|i| format!("P{}", i)).collect();
    assert_eq!(titles, expected);
}

#[tokio::test]
async fn test_periodic_save_leaves_complete_file() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html_page("Root", "", r#"<a href="/a">a</a><a href="/b">b</a>"#),
    )
    .await;
    mount_page(&mock_server, "/a", html_page("A", "", "")).await;
    mount_page(&mock_server, "/b", html_page("B", "", "")).await;

    let dir = tempdir().unwrap();
    let results_path = dir.path().join("results.json");
    let mut config = create_test_config(vec![format!("{}/", base_url)], 100, &results_path);
    config.crawler.save_interval = 2;

    let report = crawl(config).await.expect("Crawl failed");

    // One periodic save after two records, then the final save
    assert_eq!(report.statistics.saves, 2);
    assert_eq!(read_records_json(&results_path).unwrap().len(), 3);
}
