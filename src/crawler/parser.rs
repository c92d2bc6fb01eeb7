//! HTML parser for extracting links and metadata
//!
//! This module handles parsing HTML content to extract:
//! - Page title
//! - Meta description
//! - Links to follow (from `<a href>` tags)
//!
//! Parsing goes through html5ever's tag-soup recovery, so any input, however
//! broken, produces a best-effort result instead of an error.

use crate::url::normalize_link_str;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracted information from an HTML page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    /// The URL the HTML was fetched from
    pub url: String,

    /// Trimmed text of the first `<title>`, empty if there is none
    pub title: String,

    /// Trimmed `content` of the first `<meta name="description">`, empty if absent
    pub description: String,

    /// Absolute `http`/`https` links, duplicate-free, in first-seen document order
    pub links: Vec<String>,
}

/// Parses HTML content and extracts title, description and links
///
/// # Link Extraction Rules
///
/// Every `<a>` element carrying an `href` is passed through
/// [`normalize_link_str`] with `url` as the base; anything it rejects
/// (`mailto:`, `javascript:`, unresolvable hrefs) is skipped. If `url`
/// itself is not an absolute URL no links are extracted.
///
/// # Arguments
///
/// * `url` - The URL the HTML was fetched from
/// * `html` - The HTML content to parse
///
/// # Example
///
/// ```
/// use web_sweep::crawler::extract_page;
///
/// let html = r#"<html><head><title>Test</title></head><body><a href="/page">Link</a></body></html>"#;
/// let page = extract_page("https://example.com/", html);
/// assert_eq!(page.title, "Test");
/// assert_eq!(page.links, vec!["https://example.com/page".to_string()]);
/// ```
pub fn extract_page(url: &str, html: &str) -> ExtractionResult {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let description = extract_description(&document);
    let links = match Url::parse(url) {
        Ok(_) => extract_links(&document, url),
        Err(e) => {
            tracing::debug!("Cannot resolve links against {}: {}", url, e);
            Vec::new()
        }
    };

    ExtractionResult {
        url: url.to_string(),
        title,
        description,
        links,
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> String {
    let Ok(title_selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Extracts the description from the first `<meta name="description">`
///
/// Only the first matching element is consulted, even when it lacks a
/// `content` attribute.
fn extract_description(document: &Html) -> String {
    let Ok(meta_selector) = Selector::parse(r#"meta[name="description"]"#) else {
        return String::new();
    };

    document
        .select(&meta_selector)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// Extracts all valid links from the HTML document
fn extract_links(document: &Html, base_url: &str) -> Vec<String> {
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    let Ok(a_selector) = Selector::parse("a[href]") else {
        return links;
    };

    for element in document.select(&a_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        if let Some(absolute_url) = normalize_link_str(base_url, href) {
            if seen.insert(absolute_url.clone()) {
                links.push(absolute_url);
            }
        }
    }

    links
}
