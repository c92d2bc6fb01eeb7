use url::{Position, Url};

/// Schemes a discovered link may carry to be followed
const WEB_SCHEMES: &[&str] = &["http", "https"];

/// Resolves a raw `href` against the page it was found on
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Strip the fragment (everything from the first `#`)
/// 3. Resolve against `base` using standard relative-reference rules
/// 4. Keep the result only if its scheme is `http` or `https`
///
/// Links that name their own authority (`https://host/...` or `//host/...`)
/// come back exactly as written: host case, default ports, trailing slashes
/// and query order are all left alone. Relative links take the scheme and
/// authority of `base`.
///
/// # Arguments
///
/// * `base` - URL of the page the link appeared on
/// * `raw_href` - The `href` attribute value as written in the document
///
/// # Returns
///
/// * `Some(String)` - The absolute, fragment-free link
/// * `None` - The href could not be resolved or is not a web link
///
/// # Examples
///
/// ```
/// use url::Url;
/// use web_sweep::url::normalize_link;
///
/// let base = Url::parse("https://a.com/p").unwrap();
/// assert_eq!(normalize_link(&base, "/q").as_deref(), Some("https://a.com/q"));
/// assert_eq!(normalize_link(&base, "r#frag").as_deref(), Some("https://a.com/r"));
/// assert_eq!(normalize_link(&base, "mailto:x@y.com"), None);
/// assert_eq!(
///     normalize_link(&base, "https://A.COM:443/X").as_deref(),
///     Some("https://A.COM:443/X")
/// );
/// ```
pub fn normalize_link(base: &Url, raw_href: &str) -> Option<String> {
    let href = strip_fragment(raw_href.trim());

    let mut resolved = base.join(href).ok()?;
    if !is_web_scheme(resolved.scheme()) {
        return None;
    }

    if href.starts_with("//") {
        return Some(format!("{}:{}", resolved.scheme(), href));
    }
    if names_authority(href) {
        return Some(href.to_string());
    }

    // An empty href resolves to the base itself, which may carry its own fragment
    resolved.set_fragment(None);

    Some(resolved.into())
}

/// Same as [`normalize_link`], taking the page URL as written
///
/// Relative links keep the page URL's own spelling of scheme and authority,
/// so a page fetched as `https://A.COM/` links `/x` as `https://A.COM/x`.
/// Returns `None` when the page URL is not an absolute URL.
pub fn normalize_link_str(base: &str, raw_href: &str) -> Option<String> {
    let parsed = Url::parse(base).ok()?;
    let link = normalize_link(&parsed, raw_href)?;

    let href = strip_fragment(raw_href.trim());
    if href.starts_with("//") || names_authority(href) {
        return Some(link);
    }

    let (Some(raw_prefix), Some(rest)) = (
        written_prefix(base),
        link.strip_prefix(&parsed[..Position::BeforePath]),
    ) else {
        return Some(link);
    };

    Some(format!("{}{}", raw_prefix, rest))
}

/// Returns true if `scheme` is one the crawler follows
pub fn is_web_scheme(scheme: &str) -> bool {
    WEB_SCHEMES.contains(&scheme)
}

fn strip_fragment(href: &str) -> &str {
    match href.find('#') {
        Some(index) => &href[..index],
        None => href,
    }
}

/// Splits `scheme:rest` when `href` starts with a syntactically valid scheme
fn split_scheme(href: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = href.split_once(':')?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some((scheme, rest))
}

/// True for `scheme://authority...` hrefs
fn names_authority(href: &str) -> bool {
    matches!(split_scheme(href), Some((_, rest)) if rest.starts_with("//"))
}

/// `scheme://authority` of an absolute URL as written, scheme lowercased
fn written_prefix(url: &str) -> Option<String> {
    let (scheme, rest) = split_scheme(url)?;
    let after = rest.strip_prefix("//")?;
    let end = after.find(['/', '?', '#']).unwrap_or(after.len());
    Some(format!("{}://{}", scheme.to_ascii_lowercase(), &after[..end]))
}
