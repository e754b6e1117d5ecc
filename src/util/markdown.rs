//! Markdown rendering for teacher scripts.
//!
//! Scripts may be generated, so the output is treated as untrusted before it
//! reaches `inner_html`: raw HTML never survives, and link or image targets
//! must be relative or use an allowed scheme.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

/// URL schemes a rendered link or image may point at.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Replacement target for a link or image whose URL is refused.
const BLOCKED_URL: &str = "#";

/// Render a teacher script to HTML for `inner_html`.
pub fn render_markdown_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let events = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Link {
            link_type,
            dest_url: checked_url(dest_url),
            title,
            id,
        })),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Some(Event::Start(Tag::Image {
            link_type,
            dest_url: checked_url(dest_url),
            title,
            id,
        })),
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

fn checked_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_allowed_url(&url) { url } else { CowStr::Borrowed(BLOCKED_URL) }
}

/// True for relative URLs and absolute ones with an allowed scheme.
pub fn is_allowed_url(url: &str) -> bool {
    let url = url.trim();
    let scheme_end = url.find(|c| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if url[i..].starts_with(':') => {
            let scheme = &url[..i];
            ALLOWED_SCHEMES.iter().any(|allowed| scheme.eq_ignore_ascii_case(allowed))
        }
        _ => true,
    }
}
