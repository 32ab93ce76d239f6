use crate::error::{ParseError, ParseErrorKind, Result};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::{fs, io, io::Read, path::Path};
use tracing::debug;

/// How far into the input the XML declaration is looked for
const DECLARATION_WINDOW: usize = 1024;

pub fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| io_error(e, &path.display().to_string()))?;
    decode(bytes)
}

pub fn read_all<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| io_error(e, "<reader>"))?;
    decode(bytes)
}

/// Decodes raw document bytes using the byte order mark, then the
/// `encoding` of the XML declaration, then UTF-8
pub fn decode(mut bytes: Vec<u8>) -> Result<String> {
    let (encoding, bom_len) = detect_encoding(&bytes)?;
    debug!(encoding = encoding.name(), "Decoding input");

    if encoding == UTF_8 {
        bytes.drain(..bom_len);
        return String::from_utf8(bytes)
            .map_err(|e| ParseError::new(ParseErrorKind::InvalidUtf8).with_source(e));
    }

    let body = bytes.get(bom_len..).unwrap_or_default();
    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
        .ok_or_else(|| {
            ParseError::new(ParseErrorKind::InvalidEncoding(encoding.name().to_string()))
        })
}

fn detect_encoding(bytes: &[u8]) -> Result<(&'static Encoding, usize)> {
    if let Some(found) = Encoding::for_bom(bytes) {
        return Ok(found);
    }
    // UTF-16 without a byte order mark still starts with "<?"
    if bytes.starts_with(&[0x3C, 0x00, 0x3F, 0x00]) {
        return Ok((UTF_16LE, 0));
    }
    if bytes.starts_with(&[0x00, 0x3C, 0x00, 0x3F]) {
        return Ok((UTF_16BE, 0));
    }

    match declared_encoding(bytes) {
        Some(label) => match Encoding::for_label(label) {
            // an ASCII-compatible declaration cannot be UTF-16
            Some(encoding) if encoding == UTF_16LE || encoding == UTF_16BE => Ok((UTF_8, 0)),
            Some(encoding) => Ok((encoding, 0)),
            None => Err(ParseError::new(ParseErrorKind::InvalidEncoding(
                String::from_utf8_lossy(label).into_owned(),
            ))),
        },
        None => Ok((UTF_8, 0)),
    }
}

/// The `encoding` pseudo-attribute of a leading `<?xml ...?>` declaration
fn declared_encoding(bytes: &[u8]) -> Option<&[u8]> {
    if !bytes.starts_with(b"<?xml") {
        return None;
    }
    let window = bytes.get(..bytes.len().min(DECLARATION_WINDOW))?;
    let declaration = window.get(..find(window, b"?>")?)?;

    let rest = declaration.get(find(declaration, b"encoding")? + b"encoding".len()..)?;
    let rest = trim_start(rest).strip_prefix(b"=")?;
    let rest = trim_start(rest);
    let (&quote, rest) = rest.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let end = rest.iter().position(|&b| b == quote)?;
    rest.get(..end)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn trim_start(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    bytes.get(start..).unwrap_or_default()
}

fn io_error(e: io::Error, origin: &str) -> ParseError {
    let kind = match e.kind() {
        io::ErrorKind::NotFound => ParseErrorKind::NotFound(origin.to_string()),
        _ => ParseErrorKind::IoError(format!("Cannot read {}: {}", origin, e)),
    };
    ParseError::new(kind).with_source(e)
}
