//! Naive HTML extraction
//!
//! Very simple extraction: try `<title>`, then `<h1>`, and all `<p>` tags.
//! No DOM is built; this is regex scraping at the level a teaching demo
//! needs, not a general HTML parser.

use advisor_core::text;
use regex::Regex;
use std::sync::LazyLock;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("valid regex"));
static H1_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1[^>]*>(.*?)</h1>").expect("valid regex"));
static P_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p>").expect("valid regex"));
static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<(script|style)[^>]*>.*?</(script|style)>").expect("valid regex"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").expect("valid regex"));

const DEFAULT_TITLE: &str = "Untitled article";

/// Strip nested tags and decode the handful of entities that matter
fn flatten(fragment: &str) -> String {
    let stripped = TAG_RE.replace_all(fragment, " ");
    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    text::normalize(&decoded)
}

/// Extract a page title: `<title>`, then `<h1>`, else a fixed fallback
pub fn extract_title(html: &str) -> String {
    for re in [&*TITLE_RE, &*H1_RE] {
        if let Some(captures) = re.captures(html) {
            let title = flatten(&captures[1]);
            if !title.is_empty() {
                return title;
            }
        }
    }
    DEFAULT_TITLE.to_string()
}

/// Extract article body text: every `<p>` block, flattened and joined
pub fn extract_paragraphs(html: &str) -> String {
    let body = SCRIPT_RE.replace_all(html, " ");
    let paragraphs: Vec<String> = P_RE
        .captures_iter(&body)
        .map(|c| flatten(&c[1]))
        .filter(|p| !p.is_empty())
        .collect();
    paragraphs.join(" ")
}
