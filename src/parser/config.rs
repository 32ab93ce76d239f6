use crate::error::{Result, SecurityError};

pub const DEFAULT_MAX_DEPTH: usize = 128;
pub const DEFAULT_MAX_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Configuration for parser limits and validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum element nesting depth, the root element being depth 1.
    /// Elements declared inside internal entities count where they expand
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_size: usize,
    /// Accept documents carrying a DTD and expand their internal entities.
    /// When off, a DTD fails with `SecurityError::DtdNotAllowed`
    pub allow_dtd: bool,
}

/// Tracks nesting depth while tokens are scanned or a tree is converted
#[derive(Debug)]
pub struct ParsingContext {
    current_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
            allow_dtd: true,
        }
    }
}

impl ParserConfig {
    pub fn validate_size(&self, size: usize) -> Result<()> {
        if size > self.max_size {
            return Err(SecurityError::MaxSizeExceeded.into());
        }
        Ok(())
    }
}

impl Default for ParsingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ParsingContext {
    pub fn new() -> Self {
        Self { current_depth: 0 }
    }

    pub fn depth(&self) -> usize {
        self.current_depth
    }

    pub fn enter_nested(&mut self, config: &ParserConfig) -> Result<()> {
        self.current_depth += 1;
        if self.current_depth > config.max_depth {
            return Err(SecurityError::MaxDepthExceeded.into());
        }
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }
}
