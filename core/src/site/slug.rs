//! Slug generation for menu labels
//!
//! Slugs are the anchor identifiers pages expose for deep links.

use regex::Regex;
use std::sync::LazyLock;

// ASCII word characters only: `&`, accents and other symbols are dropped.
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("static regex"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Turn a human-readable label into an anchor slug
///
/// Lower-cases, strips everything except ASCII word characters, whitespace
/// and hyphens, trims, then collapses whitespace runs into a single `-`.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    WHITESPACE.replace_all(stripped.trim(), "-").into_owned()
}
