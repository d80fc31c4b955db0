//! Markup rendering seam.
//!
//! The pipeline never looks inside a rendered body: it hands the raw body text
//! to a [`MarkupRenderer`] and stores whatever fragment comes back. The stock
//! renderer is [`CommonMark`], backed by `pulldown-cmark`.

use pulldown_cmark::{Event, Options, Parser, Tag, html};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("markup rendering failed: {0}")]
pub struct RenderError(pub String);

/// Turns a document body into an HTML fragment.
pub trait MarkupRenderer {
    fn render(&self, body: &str) -> Result<String, RenderError>;
}

/// CommonMark with tables, strikethrough, definition lists, explicit heading
/// ids (`# Title {#id}`), and smart punctuation. Links to absolute URLs open in
/// a new tab.
#[derive(Debug, Clone, Copy)]
pub struct CommonMark {
    options: Options,
}

impl CommonMark {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_DEFINITION_LIST);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        options.insert(Options::ENABLE_SMART_PUNCTUATION);
        Self { options }
    }
}

impl Default for CommonMark {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupRenderer for CommonMark {
    fn render(&self, body: &str) -> Result<String, RenderError> {
        let parser = Parser::new_ext(body, self.options).map(|event| match event {
            Event::Start(tag @ Tag::Link { .. }) if links_outside_site(&tag) => open_in_new_tab(tag),
            other => other,
        });
        let mut out = String::with_capacity(body.len() * 3 / 2);
        html::push_html(&mut out, parser);
        Ok(out)
    }
}

/// `scheme:` or `//host` destinations leave the site.
fn links_outside_site(tag: &Tag<'_>) -> bool {
    let Tag::Link { dest_url, .. } = tag else {
        return false;
    };
    if dest_url.starts_with("//") {
        return true;
    }
    match dest_url.split_once(':') {
        Some((scheme, _)) => {
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Replace a link start tag with the same `<a>` markup plus `target="_blank"`.
fn open_in_new_tab(tag: Tag<'_>) -> Event<'_> {
    let mut open = String::new();
    html::push_html(&mut open, std::iter::once(Event::Start(tag)));
    if open.ends_with('>') {
        open.insert_str(open.len() - 1, r#" target="_blank""#);
    }
    Event::InlineHtml(open.into())
}
