//! URL handling module for Web-Sweep
//!
//! Discovered links are resolved against their page, stripped of fragments,
//! and filtered down to `http`/`https`. URL identity is otherwise the plain
//! string form. Links that carry their own host are kept as written, and
//! relative links reuse the page URL's spelling, so neither host case nor
//! default ports nor trailing slashes are normalized.

mod normalize;

pub use normalize::{is_web_scheme, normalize_link, normalize_link_str};
