//! Pagination of the ordered collection.
//!
//! The ordered documents are cut into fixed-size pages. Page 1 is the site
//! index and lives at the output root; every later page lives one directory
//! deeper, under `page/`. All links are relative to the page that carries
//! them, so they differ by depth:
//!
//! | Page | File | Previous | Next | Root prefix |
//! |------|------|----------|------|-------------|
//! | 1 | `index.html` | — | `page/2.html` | `""` |
//! | 2 | `page/2.html` | `../index.html` | `3.html` | `"../"` |
//! | n ≥ 3 | `page/n.html` | `{n-1}.html` | `{n+1}.html` | `"../"` |
//!
//! The last page has no next link. An empty collection has zero pages.

use crate::naming::{LISTING_DIR, OUTPUT_EXTENSION, listing_file};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PaginateError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// Position and navigation for one listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// 1-based page number.
    pub number: usize,
    pub total: usize,
    /// Slice bounds into the ordered collection.
    pub start: usize,
    pub end: usize,
    pub has_previous: bool,
    pub has_next: bool,
    /// Relative link to the previous page; empty on page 1.
    pub previous_link: String,
    /// Relative link to the next page; empty on the last page.
    pub next_link: String,
}

impl Pagination {
    /// This page's documents.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.start..self.end]
    }

    /// Output path relative to the site root.
    pub fn output_path(&self) -> PathBuf {
        listing_file(self.number)
    }

    /// Prefix that reaches the site root from this page.
    pub fn root_prefix(&self) -> &'static str {
        if self.number == 1 { "" } else { "../" }
    }
}

/// Number of pages needed for `count` items.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size)
}

/// Compute every page for a collection of `count` documents.
pub fn paginate(count: usize, page_size: usize) -> Result<Vec<Pagination>, PaginateError> {
    if page_size == 0 {
        return Err(PaginateError::ZeroPageSize);
    }
    let total = total_pages(count, page_size);

    Ok((1..=total)
        .map(|number| {
            let start = (number - 1) * page_size;
            let end = (number * page_size).min(count);
            Pagination {
                number,
                total,
                start,
                end,
                has_previous: number > 1,
                has_next: number < total,
                previous_link: previous_link(number),
                next_link: next_link(number, total),
            }
        })
        .collect())
}

fn previous_link(number: usize) -> String {
    match number {
        0 | 1 => String::new(),
        // Page 1 sits one level up, at the root.
        2 => format!("../index.{OUTPUT_EXTENSION}"),
        n => format!("{}.{OUTPUT_EXTENSION}", n - 1),
    }
}

fn next_link(number: usize, total: usize) -> String {
    if number >= total {
        String::new()
    } else if number == 1 {
        format!("{LISTING_DIR}/2.{OUTPUT_EXTENSION}")
    } else {
        format!("{}.{OUTPUT_EXTENSION}", number + 1)
    }
}
