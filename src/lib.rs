//! xml2record: turn XML documents into nested records
//!
//! Every element becomes a [`NodeRecord`] holding its tag, its attributes
//! and either its child elements or its text:
//! - Parse XML text, files or readers (parsing itself is done by `roxmltree`)
//! - Look up children by tag with [`get_child`] and [`get_children`]
//! - Bound input size and nesting depth through [`ParserConfig`]
//!
//! # Examples
//! ```
//! use xml2record::{get_child, parse, Result};
//!
//! fn example() -> Result<()> {
//!     let record = parse("<PARENT><CHILD1>TEXT1</CHILD1><CHILD2>TEXT2</CHILD2></PARENT>")?;
//!     let child = get_child(&record, "CHILD1");
//!     assert_eq!(child.and_then(|c| c.text()), Some("TEXT1"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use std::{io::Read, path::Path};
use tracing::{debug, error, info, instrument};

pub mod converter;
pub mod error;
pub mod parser;
pub mod query;
pub mod record;
pub mod utils;

// Re-exports
pub use converter::{node_to_dict, TreeConverter};
pub use error::{Location, ParseError, ParseErrorKind, Result, SecurityError};
pub use parser::config::{ParserConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE};
pub use query::{get_child, get_children, ChildrenByTag};
pub use record::{Attrs, NodeBody, NodeRecord};

/// Parses a complete XML document and converts its root element.
///
/// Uses [`ParserConfig::default`]: documents larger than
/// [`DEFAULT_MAX_SIZE`] bytes or nested deeper than [`DEFAULT_MAX_DEPTH`]
/// elements are refused with [`ParseErrorKind::Security`]. Use
/// [`parse_with_config`] to raise either limit.
pub fn parse(xml_text: &str) -> Result<NodeRecord> {
    parse_with_config(xml_text, &ParserConfig::default())
}

#[instrument(skip(xml_text), fields(len = xml_text.len()))]
pub fn parse_with_config(xml_text: &str, config: &ParserConfig) -> Result<NodeRecord> {
    debug!("Starting to parse XML text");

    let document = parser::parse_document(xml_text, config)?;
    let record = TreeConverter::new(config.clone()).convert(document.root_element())?;

    debug!(root = record.tag(), "Parsing completed");
    Ok(record)
}

/// Reads and parses the XML file at `path`.
///
/// The bytes are decoded from the byte order mark or the declared
/// `encoding`, falling back to UTF-8. Limits are those of [`parse`].
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<NodeRecord> {
    parse_file_with_config(path, &ParserConfig::default())
}

#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn parse_file_with_config<P: AsRef<Path>>(path: P, config: &ParserConfig) -> Result<NodeRecord> {
    debug!("Starting to parse file");

    let content = utils::read_file(path.as_ref()).map_err(|e| {
        error!("Failed to read file: {}", e);
        e
    })?;

    info!(bytes = content.len(), "File read successfully");
    parse_with_config(&content, config)
}

/// Reads `reader` to the end and parses what it produced, decoding it like
/// [`parse_file`]
pub fn parse_reader<R: Read>(reader: R) -> Result<NodeRecord> {
    parse_reader_with_config(reader, &ParserConfig::default())
}

#[instrument(skip_all)]
pub fn parse_reader_with_config<R: Read>(reader: R, config: &ParserConfig) -> Result<NodeRecord> {
    let content = utils::read_all(reader).map_err(|e| {
        error!("Failed to read input: {}", e);
        e
    })?;

    info!(bytes = content.len(), "Input read successfully");
    parse_with_config(&content, config)
}
