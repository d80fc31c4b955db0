//! Collection loading.
//!
//! Reads every eligible file directly inside the source directory and parses
//! it into a [`Document`]. Subdirectories are skipped, which lets a post folder
//! carry its own `statics/` directory without it being mistaken for content.
//!
//! Entries are parsed in file-name order. Directory enumeration order differs
//! between platforms and filesystems; sorting first means the tie-break used
//! by [`crate::order`] is the same everywhere.
//!
//! Loading is fail-fast: the first unreadable or malformed file aborts with
//! its path, and no partial collection is returned.

use crate::document::{Document, ParseError, parse_document};
use crate::markup::MarkupRenderer;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("source directory not found: {}", .0.display())]
    MissingInput(PathBuf),
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed document {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: ParseError,
    },
    #[error(
        "identifier `{identifier}` produced by both {} and {}",
        .first.display(),
        .second.display()
    )]
    DuplicateIdentifier {
        identifier: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl LoadError {
    /// Path of the file (or directory) the error is about.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::MissingInput(path) => path,
            LoadError::Read { path, .. } | LoadError::Malformed { path, .. } => path,
            LoadError::DuplicateIdentifier { second, .. } => second,
        }
    }
}

/// Whether `path` passes the optional extension filter.
///
/// The filter is case-insensitive and may be written with or without the
/// leading dot (`"md"` and `".md"` are equivalent). `None` accepts every file.
pub fn matches_extension(path: &Path, required: Option<&str>) -> bool {
    let Some(required) = required else {
        return true;
    };
    let required = required.trim_start_matches('.');
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(required))
        .unwrap_or(false)
}

/// List the files to load, sorted by file name.
pub fn source_files(dir: &Path, require_extension: Option<&str>) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::MissingInput(dir.to_path_buf()));
    }
    let read_err = |source: std::io::Error| LoadError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() && matches_extension(&path, require_extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load and parse every eligible document in `dir`.
///
/// The result is in file-name order; ordering by rank is a separate step.
pub fn load_collection(
    dir: &Path,
    require_extension: Option<&str>,
    renderer: &dyn MarkupRenderer,
) -> Result<Vec<Document>, LoadError> {
    let files = source_files(dir, require_extension)?;

    let mut documents = Vec::with_capacity(files.len());
    let mut seen: HashMap<String, PathBuf> = HashMap::new();

    for path in files {
        let raw = fs::read_to_string(&path).map_err(|source| LoadError::Read {
            path: path.clone(),
            source,
        })?;
        let document = parse_document(&raw, renderer).map_err(|source| LoadError::Malformed {
            path: path.clone(),
            source,
        })?;

        if let Some(first) = seen.get(document.identifier()) {
            return Err(LoadError::DuplicateIdentifier {
                identifier: document.identifier().to_string(),
                first: first.clone(),
                second: path,
            });
        }
        debug!(
            path = %path.display(),
            identifier = document.identifier(),
            rank = document.rank(),
            "parsed document"
        );
        seen.insert(document.identifier().to_string(), path);
        documents.push(document);
    }

    info!(count = documents.len(), dir = %dir.display(), "loaded collection");
    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::CommonMark;
    use crate::test_helpers::{doc_text, write_doc};
    use tempfile::TempDir;

    #[test]
    fn loads_all_markdown_files() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "a.md", &doc_text("Alpha", 1));
        write_doc(tmp.path(), "b.md", &doc_text("Beta", 2));

        let docs = load_collection(tmp.path(), Some("md"), &CommonMark::new()).unwrap();
        let titles: Vec<&str> = docs.iter().map(|d| d.title()).collect();
        assert_eq!(titles, vec!["Alpha", "Beta"]);
    }

    #[test]
    fn result_is_in_file_name_order() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "c.md", &doc_text("Gamma", 0));
        write_doc(tmp.path(), "a.md", &doc_text("Alpha", 0));
        write_doc(tmp.path(), "b.md", &doc_text("Beta", 0));

        let docs = load_collection(tmp.path(), Some("md"), &CommonMark::new()).unwrap();
        let ids: Vec<&str> = docs.iter().map(|d| d.identifier()).collect();
        assert_eq!(ids, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn subdirectories_are_skipped() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "a.md", &doc_text("Alpha", 1));
        fs::create_dir_all(tmp.path().join("statics.md")).unwrap();
        write_doc(&tmp.path().join("statics.md"), "nested.md", &doc_text("Nested", 1));

        let docs = load_collection(tmp.path(), Some("md"), &CommonMark::new()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].title(), "Alpha");
    }

    #[test]
    fn extension_filter_skips_other_files() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "a.md", &doc_text("Alpha", 1));
        write_doc(tmp.path(), "notes.txt", "not a document at all");

        let docs = load_collection(tmp.path(), Some(".md"), &CommonMark::new()).unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn without_filter_every_file_is_parsed() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "a.md", &doc_text("Alpha", 1));
        write_doc(tmp.path(), "notes.txt", "not a document at all");

        let err = load_collection(tmp.path(), None, &CommonMark::new()).unwrap_err();
        match err {
            LoadError::Malformed { path, source } => {
                assert!(path.ends_with("notes.txt"));
                assert!(matches!(source, ParseError::MissingDelimiter));
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(matches_extension(Path::new("post.MD"), Some("md")));
        assert!(matches_extension(Path::new("post.md"), Some(".md")));
        assert!(!matches_extension(Path::new("post.markdown"), Some("md")));
        assert!(!matches_extension(Path::new("README"), Some("md")));
        assert!(matches_extension(Path::new("README"), None));
    }

    #[test]
    fn missing_directory_is_missing_input() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("nope");
        let err = load_collection(&missing, Some("md"), &CommonMark::new()).unwrap_err();
        assert!(matches!(err, LoadError::MissingInput(ref p) if p == &missing));
    }

    #[test]
    fn first_malformed_file_aborts_with_its_path() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "a.md", &doc_text("Alpha", 1));
        write_doc(tmp.path(), "b.md", "title: Broken\nno delimiter here\n");
        write_doc(tmp.path(), "c.md", "also broken");

        let err = load_collection(tmp.path(), Some("md"), &CommonMark::new()).unwrap_err();
        assert!(err.path().ends_with("b.md"));
    }

    #[test]
    fn duplicate_identifiers_rejected() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "a.md", &doc_text("Hello World", 1));
        write_doc(tmp.path(), "b.md", &doc_text("hello, world!", 2));

        let err = load_collection(tmp.path(), Some("md"), &CommonMark::new()).unwrap_err();
        match err {
            LoadError::DuplicateIdentifier {
                identifier,
                first,
                second,
            } => {
                assert_eq!(identifier, "hello-world");
                assert!(first.ends_with("a.md"));
                assert!(second.ends_with("b.md"));
            }
            other => panic!("expected DuplicateIdentifier, got {other:?}"),
        }
    }

    #[test]
    fn empty_directory_yields_empty_collection() {
        let tmp = TempDir::new().unwrap();
        let docs = load_collection(tmp.path(), Some("md"), &CommonMark::new()).unwrap();
        assert!(docs.is_empty());
    }
}
