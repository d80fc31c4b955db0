//! Shared test utilities for the pagewright test suite.
//!
//! Provides document builders (in memory and on disk) and a ready-made
//! [`BuildContext`] rooted in a temp directory.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_doc(&tmp.path().join("posts"), "a.md", &doc_text("Alpha", 3));
//! let ctx = context_for(tmp.path(), 4);
//!
//! let docs = vec![make_doc("Low", 1), make_doc("High", 9)];
//! assert_eq!(identifiers(&docs), vec!["low", "high"]);
//! ```

use std::fs;
use std::path::Path;

use crate::context::BuildContext;
use crate::document::{Document, Metadata};

/// Source text of a well-formed document.
pub fn doc_text(title: &str, order: i64) -> String {
    format!("title: {title}\nauthor: Tester\norder: {order}\n==========\nBody of {title}.\n")
}

/// Write `content` to `dir/name`, creating `dir` if needed.
pub fn write_doc(dir: &Path, name: &str, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(name), content).unwrap();
}

/// An in-memory document with a plain paragraph body.
pub fn make_doc(title: &str, rank: i64) -> Document {
    let metadata = Metadata {
        author: "Tester".to_string(),
        title: title.to_string(),
        order: rank,
    };
    Document::from_parts(metadata, format!("<p>Body of {title}.</p>\n"))
        .unwrap_or_else(|e| panic!("test document {title:?} is invalid: {e}"))
}

/// `count` documents titled `Doc 1`..`Doc count`, ranked so they are
/// already in display order.
pub fn make_docs(count: usize) -> Vec<Document> {
    (1..=count)
        .map(|i| make_doc(&format!("Doc {i}"), (count - i) as i64))
        .collect()
}

pub fn identifiers(docs: &[Document]) -> Vec<&str> {
    docs.iter().map(Document::identifier).collect()
}

/// A context reading `root/posts` and writing `root/dist`.
pub fn context_for(root: &Path, page_size: usize) -> BuildContext {
    BuildContext {
        site_title: "Test Blog".to_string(),
        source_dir: root.join("posts"),
        output_dir: root.join("dist"),
        page_size,
        require_extension: Some("md".to_string()),
        assets: Vec::new(),
    }
}
