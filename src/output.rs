//! CLI output formatting.
//!
//! Output leads with what a reader cares about (document titles in listing
//! order, page numbers) and shows file paths as secondary context.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Documents
//! 001 Hello World (rank 10)
//!     Identifier: hello-world
//! 002 Second Post (rank 3)
//!     Identifier: second-post
//!
//! Listings
//! 001 index.html (2 documents)
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 Hello World → hello-world.html
//! 002 Second Post → second-post.html
//! Page 1 → index.html
//! Assets: 3 files copied
//!
//! Generated 2 documents, 1 listing page → dist
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`, no I/O) and a
//! `print_*` wrapper that writes to stdout.

use crate::pipeline::{BuildReport, SitePlan};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Format the result of `pagewright check`.
pub fn format_check_output(site: &SitePlan) -> Vec<String> {
    let mut lines = vec!["Documents".to_string()];
    if site.documents.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, doc) in site.documents.iter().enumerate() {
        lines.push(format!(
            "{} {} (rank {})",
            format_index(i + 1),
            doc.title(),
            doc.rank()
        ));
        lines.push(format!("    Identifier: {}", doc.identifier()));
    }

    lines.push(String::new());
    lines.push("Listings".to_string());
    if site.listings.is_empty() {
        lines.push("    (none)".to_string());
    }
    for listing in &site.listings {
        lines.push(format!(
            "{} {} ({})",
            format_index(listing.number),
            listing.output_path.display(),
            plural(listing.entries.len(), "document", "documents")
        ));
    }
    lines
}

pub fn print_check_output(site: &SitePlan) {
    for line in format_check_output(site) {
        println!("{}", line);
    }
}

/// Format the result of `pagewright build`.
pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, (title, path)) in report.documents.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            title,
            path.display()
        ));
    }
    for (i, path) in report.listings.iter().enumerate() {
        lines.push(format!("Page {} \u{2192} {}", i + 1, path.display()));
    }
    if report.assets_copied > 0 {
        lines.push(format!(
            "Assets: {} copied",
            plural(report.assets_copied, "file", "files")
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {} \u{2192} {}",
        plural(report.documents.len(), "document", "documents"),
        plural(report.listings.len(), "listing page", "listing pages"),
        report.output_dir.display()
    ));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}
