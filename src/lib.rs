//! # pagewright
//!
//! A small static site generator for a folder of markdown posts. Each post
//! carries a YAML header and a markdown body; the output is one HTML page per
//! post plus paginated index pages listing them.
//!
//! # Pipeline
//!
//! ```text
//! posts/*.md ─→ load ─→ order ─→ paginate ─→ models ─→ render ─→ dist/
//!                                                     copy assets ─┘
//! ```
//!
//! Every stage before writing is a pure function of its inputs, so the whole
//! site can be planned (and checked) in memory without touching the output
//! directory.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`document`] | Splits a source file into metadata and body, derives the identifier |
//! | [`collection`] | Loads every eligible file in the source directory |
//! | [`order`] | Orders documents by rank, highest first |
//! | [`paginate`] | Cuts the ordered list into pages and computes navigation links |
//! | [`model`] | Assembles the view models the templates consume |
//! | [`render`] | Maud templates for listing and document pages |
//! | [`markup`] | Markdown → HTML seam, `pulldown-cmark` by default |
//! | [`assets`] | Copies static asset directories into the output |
//! | [`naming`] | Identifier slugs and output file names |
//! | [`config`] | `pagewright.toml` loading and validation |
//! | [`context`] | The explicit [`context::BuildContext`] every stage receives |
//! | [`pipeline`] | Drives a build end to end and maps failures to stages |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Fail Fast, Write Last
//!
//! A build either succeeds completely or fails with one diagnostic naming the
//! stage and path. All documents are parsed and rendered, and every required
//! asset directory is checked, before the first file is written, so a
//! malformed post or a bad asset path never leaves a half-updated site.
//!
//! ## Deterministic Order
//!
//! Source files are read in file-name order, documents are then sorted by
//! rank with a stable sort and reversed. The same source tree produces the
//! same site on every platform.
//!
//! ## Depth-Aware Links
//!
//! The first listing page is `index.html` at the root; later ones live in
//! `page/`. Every link is relative to the page carrying it, so the site works
//! from any base URL or straight from disk.

pub mod assets;
pub mod collection;
pub mod config;
pub mod context;
pub mod document;
pub mod markup;
pub mod model;
pub mod naming;
pub mod order;
pub mod output;
pub mod paginate;
pub mod pipeline;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
