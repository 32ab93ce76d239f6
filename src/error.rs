use std::{error::Error, fmt};

#[derive(Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
    location: Option<Location>,
    source: Option<Box<dyn Error + Send + Sync>>,
}

/// 1-based position reported by the XML parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The document is not well-formed XML
    Xml(String),
    /// The input file does not exist
    NotFound(String),
    IoError(String),
    InvalidUtf8,
    /// The declared or detected encoding is unknown, or the bytes do not
    /// decode with it
    InvalidEncoding(String),
    Security(SecurityError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityError {
    MaxDepthExceeded,
    MaxSizeExceeded,
    DtdNotAllowed,
}

impl fmt::Display for SecurityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDepthExceeded => write!(f, "maximum nesting depth exceeded"),
            Self::MaxSizeExceeded => write!(f, "maximum input size exceeded"),
            Self::DtdNotAllowed => write!(f, "DTD present but DTDs are disabled"),
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xml(msg) => write!(f, "malformed XML: {msg}"),
            Self::NotFound(path) => write!(f, "file not found: {path}"),
            Self::IoError(msg) => write!(f, "I/O error: {msg}"),
            Self::InvalidUtf8 => write!(f, "input is not valid UTF-8"),
            Self::InvalidEncoding(name) => write!(f, "cannot decode input as {name}"),
            Self::Security(err) => write!(f, "{err}"),
        }
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            location: None,
            source: None,
        }
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.location = Some(Location { line, column });
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }
}

impl From<SecurityError> for ParseError {
    fn from(err: SecurityError) -> Self {
        Self::new(ParseErrorKind::Security(err))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(loc) = &self.location {
            write!(f, " at line {}, column {}", loc.line, loc.column)?;
        }
        Ok(())
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn Error + 'static))
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
