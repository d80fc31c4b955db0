//! View models handed to the templates.
//!
//! Building a model is pure assembly: the documents are already ordered and
//! the pagination already computed, so this module only copies fields and
//! joins relative links. Everything here serializes to JSON for
//! `pagewright check --json`.

use crate::document::Document;
use crate::naming::document_file;
use crate::paginate::Pagination;
use serde::Serialize;
use std::path::PathBuf;

/// One row on a listing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryModel {
    pub identifier: String,
    pub title: String,
    pub author: String,
    /// Link to the document page, relative to the listing page.
    pub href: String,
}

/// A listing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingModel {
    pub site_title: String,
    pub number: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_link: String,
    pub next_link: String,
    pub root_prefix: String,
    pub output_path: PathBuf,
    pub entries: Vec<EntryModel>,
}

/// A per-document page. Document pages live at the site root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentModel {
    pub site_title: String,
    pub identifier: String,
    pub title: String,
    pub author: String,
    /// Rendered HTML fragment, inserted unescaped.
    pub body: String,
    pub output_path: PathBuf,
}

pub fn build_listing_model(
    documents: &[Document],
    page: &Pagination,
    site_title: &str,
) -> ListingModel {
    let root_prefix = page.root_prefix();
    let entries = page
        .slice(documents)
        .iter()
        .map(|doc| EntryModel {
            identifier: doc.identifier().to_string(),
            title: doc.title().to_string(),
            author: doc.author().to_string(),
            href: format!("{root_prefix}{}", document_file(doc.identifier())),
        })
        .collect();

    ListingModel {
        site_title: site_title.to_string(),
        number: page.number,
        total: page.total,
        has_previous: page.has_previous,
        has_next: page.has_next,
        previous_link: page.previous_link.clone(),
        next_link: page.next_link.clone(),
        root_prefix: root_prefix.to_string(),
        output_path: page.output_path(),
        entries,
    }
}

/// One listing model per page, in page order.
pub fn build_listing_models(
    documents: &[Document],
    pages: &[Pagination],
    site_title: &str,
) -> Vec<ListingModel> {
    pages
        .iter()
        .map(|page| build_listing_model(documents, page, site_title))
        .collect()
}

pub fn build_document_model(document: &Document, site_title: &str) -> DocumentModel {
    DocumentModel {
        site_title: site_title.to_string(),
        identifier: document.identifier().to_string(),
        title: document.title().to_string(),
        author: document.author().to_string(),
        body: document.body().to_string(),
        output_path: PathBuf::from(document_file(document.identifier())),
    }
}

/// One document model per document, in collection order.
pub fn build_document_models(documents: &[Document], site_title: &str) -> Vec<DocumentModel> {
    documents
        .iter()
        .map(|doc| build_document_model(doc, site_title))
        .collect()
}
