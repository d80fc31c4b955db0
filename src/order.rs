//! Display ordering.
//!
//! Documents are listed by rank, highest first. The order is produced by a
//! stable ascending sort followed by a full reversal, so among equal ranks the
//! document that came *later* in the input is listed *earlier*:
//!
//! ```text
//! input (file-name order):  a:1  b:5  c:1  d:5
//! stable ascending sort:    a:1  c:1  b:5  d:5
//! reversed:                 d:5  b:5  c:1  a:1
//! ```
//!
//! A stable descending sort would give `b d a c` instead, which is not the
//! same listing.

use crate::document::Document;

/// Order documents by rank, highest first, ties in reverse input order.
pub fn order_by_rank(documents: &mut [Document]) {
    documents.sort_by_key(Document::rank);
    documents.reverse();
}
