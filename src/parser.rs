//! Glue between the `roxmltree` parser and the converter.
//!
//! `roxmltree` owns the grammar: this module only applies the configured
//! size and nesting limits before handing it the text, and maps its errors
//! and names into this crate's types.

pub mod config;
mod nesting;

pub use config::{ParserConfig, ParsingContext};

use crate::error::{ParseError, ParseErrorKind, Result, SecurityError};
use roxmltree::{Document, ParsingOptions, TextPos};
use tracing::{error, warn};

/// Parses `text` into a `roxmltree` document under the given limits
pub fn parse_document<'input>(
    text: &'input str,
    config: &ParserConfig,
) -> Result<Document<'input>> {
    config.validate_size(text.len()).map_err(|e| {
        warn!(size = text.len(), max = config.max_size, "Input too large");
        e
    })?;
    nesting::check_nesting(text, config).map_err(|e| {
        warn!(max = config.max_depth, "Input nested too deeply");
        e
    })?;

    let options = ParsingOptions {
        allow_dtd: config.allow_dtd,
        ..ParsingOptions::default()
    };

    Document::parse_with_options(text, options).map_err(|e| {
        if matches!(e, roxmltree::Error::DtdDetected) {
            warn!("Document carries a DTD but DTDs are disabled");
            return ParseError::from(SecurityError::DtdNotAllowed).with_source(e);
        }
        error!("Failed to parse XML: {}", e);
        let TextPos { row, col } = e.pos();
        ParseError::new(ParseErrorKind::Xml(e.to_string()))
            .with_location(to_usize(row), to_usize(col))
            .with_source(e)
    })
}

/// Renders a resolved name, using `{uri}local` when it has a namespace
pub(crate) fn qualified_name(namespace: Option<&str>, local: &str) -> String {
    match namespace {
        Some(uri) => format!("{{{uri}}}{local}"),
        None => local.to_string(),
    }
}

fn to_usize(n: u32) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}
