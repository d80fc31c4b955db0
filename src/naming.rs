//! Centralized naming for identifiers and output paths.
//!
//! Every generated file name comes from this module, so the listing pages,
//! the per-document pages, and the links between them always agree.
//!
//! ## Output Layout
//!
//! ```text
//! dist/
//! ├── index.html            # Listing page 1 (site root)
//! ├── page/
//! │   ├── 2.html            # Listing pages 2..N, one level deeper
//! │   └── 3.html
//! ├── hello-world.html      # One page per document, named by identifier
//! └── getting-started.html
//! ```
//!
//! ## Identifiers
//!
//! A document's identifier is the slug of its title: lowercased, every run of
//! whitespace or punctuation collapsed to a single `-`, leading and trailing
//! dashes trimmed. Non-ASCII letters are transliterated first, so
//! `"Ça marche"` becomes `ca-marche`.

use std::path::PathBuf;

/// Extension shared by listing and document pages.
///
/// Static assets with this extension are never copied, so they cannot clobber
/// generated pages.
pub const OUTPUT_EXTENSION: &str = "html";

/// Subdirectory holding listing pages 2 and up.
pub const LISTING_DIR: &str = "page";

/// Derive a URL-safe identifier from a title.
///
/// Total and deterministic: every input maps to exactly one output, and titles
/// made only of punctuation or whitespace map to the empty string.
///
/// - `"Hello, World!"` → `"hello-world"`
/// - `"  Rust   2024  "` → `"rust-2024"`
/// - `"???"` → `""`
pub fn slugify(title: &str) -> String {
    slug::slugify(title)
}

/// File name of a per-document page, relative to the output root.
pub fn document_file(identifier: &str) -> String {
    format!("{identifier}.{OUTPUT_EXTENSION}")
}

/// Path of listing page `number` (1-based), relative to the output root.
///
/// - `1` → `index.html`
/// - `n ≥ 2` → `page/n.html`
pub fn listing_file(number: usize) -> PathBuf {
    if number <= 1 {
        PathBuf::from(format!("index.{OUTPUT_EXTENSION}"))
    } else {
        PathBuf::from(LISTING_DIR).join(format!("{number}.{OUTPUT_EXTENSION}"))
    }
}
