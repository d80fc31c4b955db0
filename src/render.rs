//! HTML templates.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time templating. Every
//! interpolated string is escaped except a document's rendered body, which
//! is already HTML and goes in through `PreEscaped`.
//!
//! The stylesheet is embedded at compile time and inlined into each page, so
//! the output has no stylesheet file to keep in sync.

use crate::model::{DocumentModel, ListingModel};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Base stylesheet inlined into every page.
pub const STYLESHEET: &str = include_str!("../static/style.css");

// ============================================================================
// Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the site header linking back to the first listing page
fn site_header(site_title: &str, home_href: &str) -> Markup {
    html! {
        header.site-header {
            a href=(home_href) { (site_title) }
        }
    }
}

/// Previous / position / next controls for a listing page
fn pager(model: &ListingModel) -> Markup {
    html! {
        nav.pager {
            @if model.has_previous {
                a.pager-prev href=(model.previous_link) rel="prev" { "← Newer" }
            } @else {
                span.pager-prev {}
            }
            span.pager-status { "Page " (model.number) " of " (model.total) }
            @if model.has_next {
                a.pager-next href=(model.next_link) rel="next" { "Older →" }
            } @else {
                span.pager-next {}
            }
        }
    }
}

// ============================================================================
// Page renderers
// ============================================================================

/// Renders one listing page.
pub fn render_listing(model: &ListingModel, css: &str) -> String {
    let home = format!("{}index.html", model.root_prefix);
    let title = if model.number == 1 {
        model.site_title.clone()
    } else {
        format!("{} (page {})", model.site_title, model.number)
    };

    let content = html! {
        (site_header(&model.site_title, &home))
        main.listing {
            ul.entry-list {
                @for entry in &model.entries {
                    li.entry {
                        a.entry-title href=(entry.href) { (entry.title) }
                        @if !entry.author.is_empty() {
                            " "
                            span.entry-author { "by " (entry.author) }
                        }
                    }
                }
            }
            (pager(model))
        }
    };

    base_document(&title, css, content).into_string()
}

/// Renders one document page.
pub fn render_document(model: &DocumentModel, css: &str) -> String {
    let title = format!("{} · {}", model.title, model.site_title);

    let content = html! {
        (site_header(&model.site_title, "index.html"))
        main.post {
            article {
                h1.post-title { (model.title) }
                @if !model.author.is_empty() {
                    p.post-author { "by " (model.author) }
                }
                div.post-body {
                    (PreEscaped(&model.body))
                }
            }
        }
    };

    base_document(&title, css, content).into_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntryModel, build_document_model, build_listing_models};
    use crate::paginate::paginate;
    use crate::test_helpers::make_docs;
    use std::path::PathBuf;

    fn listing(number: usize, total: usize) -> ListingModel {
        let docs = make_docs(total * 2);
        let pages = paginate(docs.len(), 2).unwrap();
        build_listing_models(&docs, &pages, "My Blog").swap_remove(number - 1)
    }

    #[test]
    fn base_document_includes_doctype() {
        let doc = base_document("Test", "body {}", html! { p { "x" } }).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Test</title>"));
        assert!(doc.contains("body {}"));
    }

    #[test]
    fn listing_links_entries() {
        let model = listing(1, 3);
        let html = render_listing(&model, "");
        for entry in &model.entries {
            assert!(html.contains(&format!(r#"href="{}""#, entry.href)));
            assert!(html.contains(&entry.title));
        }
    }

    #[test]
    fn first_listing_has_only_next() {
        let html = render_listing(&listing(1, 3), "");
        assert!(html.contains(r#"href="page/2.html""#));
        assert!(!html.contains(r#"rel="prev""#));
        assert!(html.contains("Page 1 of 3"));
    }

    #[test]
    fn second_listing_links_back_to_index() {
        let html = render_listing(&listing(2, 3), "");
        assert!(html.contains(r#"href="../index.html" rel="prev""#));
        assert!(html.contains(r#"href="3.html" rel="next""#));
        assert!(html.contains("<title>My Blog (page 2)</title>"));
    }

    #[test]
    fn last_listing_has_no_next() {
        let html = render_listing(&listing(3, 3), "");
        assert!(html.contains(r#"href="2.html" rel="prev""#));
        assert!(!html.contains(r#"rel="next""#));
    }

    #[test]
    fn listing_escapes_titles() {
        let model = ListingModel {
            site_title: "Blog".into(),
            number: 1,
            total: 1,
            has_previous: false,
            has_next: false,
            previous_link: String::new(),
            next_link: String::new(),
            root_prefix: String::new(),
            output_path: PathBuf::from("index.html"),
            entries: vec![EntryModel {
                identifier: "script".into(),
                title: "<script>alert('xss')</script>".into(),
                author: String::new(),
                href: "script.html".into(),
            }],
        };
        let html = render_listing(&model, "");
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn document_body_is_not_escaped() {
        let docs = make_docs(1);
        let model = build_document_model(&docs[0], "My Blog");
        let html = render_document(&model, "");
        assert!(html.contains(docs[0].body()));
        assert!(html.contains(r#"<h1 class="post-title">"#));
        assert!(html.contains(r#"href="index.html""#));
    }

    #[test]
    fn document_author_optional() {
        let docs = make_docs(1);
        let mut model = build_document_model(&docs[0], "My Blog");
        model.author.clear();
        let html = render_document(&model, "");
        assert!(!html.contains("post-author"));
    }
}
