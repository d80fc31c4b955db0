//! Document parsing.
//!
//! A source document is a YAML metadata block and a markdown body separated by
//! a delimiter line of ten `=` characters:
//!
//! ```text
//! title: Hello World
//! author: Ada
//! order: 10
//! ==========
//! # Hello
//!
//! The body is plain markdown.
//! ```
//!
//! ## Metadata
//!
//! | Key | Type | Default |
//! |-----|------|---------|
//! | `title` | string | `""` |
//! | `author` | string | `""` |
//! | `order` | integer | `0` |
//!
//! Unknown keys are ignored. A key with no value (`author:`) takes the
//! default. A recognized key with the wrong type (say `order: "soon"`) is an
//! error rather than being coerced.
//!
//! ## Identifier
//!
//! The identifier is [`naming::slugify`] of the title. A title that slugifies
//! to nothing cannot name an output file, so it is rejected here.

use crate::markup::{MarkupRenderer, RenderError};
use crate::naming;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Line separating the metadata block from the body.
pub const DELIMITER: &str = "==========";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("no `==========` line separating metadata from body")]
    MissingDelimiter,
    #[error("invalid metadata: {0}")]
    Metadata(#[from] serde_yaml::Error),
    #[error("title {title:?} does not produce a usable identifier")]
    EmptyIdentifier { title: String },
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Decoded metadata block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One parsed document. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    author: String,
    title: String,
    rank: i64,
    body: String,
    identifier: String,
}

impl Document {
    /// Assemble a document from decoded metadata and an already-rendered body.
    pub fn from_parts(metadata: Metadata, body: String) -> Result<Self, ParseError> {
        let identifier = naming::slugify(&metadata.title);
        if identifier.is_empty() {
            return Err(ParseError::EmptyIdentifier {
                title: metadata.title,
            });
        }
        Ok(Self {
            author: metadata.author,
            title: metadata.title,
            rank: metadata.order,
            body,
            identifier,
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Ordering key; higher ranks are listed first.
    pub fn rank(&self) -> i64 {
        self.rank
    }

    /// Rendered HTML fragment.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// Split raw text at the first delimiter line into `(metadata, body)`.
///
/// The delimiter must occupy a whole line; trailing whitespace (including a
/// `\r` from CRLF files) is tolerated. Everything after the delimiter line is
/// the body, verbatim, even if it contains further delimiter lines.
pub fn split_document(raw: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in raw.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return Some((&raw[..offset], &raw[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Decode a metadata block. An empty (or comment-only) block yields defaults.
pub fn parse_metadata(block: &str) -> Result<Metadata, ParseError> {
    let value: serde_yaml::Value = serde_yaml::from_str(block)?;
    if value.is_null() {
        return Ok(Metadata::default());
    }
    Ok(serde_yaml::from_value(value)?)
}

/// Parse raw document text into a [`Document`], rendering the body.
pub fn parse_document(raw: &str, renderer: &dyn MarkupRenderer) -> Result<Document, ParseError> {
    let (meta_block, body) = split_document(raw).ok_or(ParseError::MissingDelimiter)?;
    let metadata = parse_metadata(meta_block)?;
    let html = renderer.render(body)?;
    Document::from_parts(metadata, html)
}
