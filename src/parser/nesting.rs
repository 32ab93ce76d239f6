//! Nesting pre-check run before the text reaches `roxmltree`.
//!
//! `roxmltree` descends one stack frame per nesting level, so the depth
//! limit has to be enforced on the token stream first. `xmlparser` tokenizes
//! without recursion. Markup declared inside internal entities nests as deep
//! as the entity body does, on top of the depth where it is referenced.

use super::config::{ParserConfig, ParsingContext};
use crate::error::{Result, SecurityError};
use std::collections::{HashMap, HashSet};
use xmlparser::{ElementEnd, EntityDefinition, Token, Tokenizer};

/// Fails with `MaxDepthExceeded` when `text` nests deeper than allowed.
///
/// Tokenizer errors end the scan early: everything up to that point stayed
/// within the limit and `roxmltree` reports the syntax error itself.
pub(crate) fn check_nesting(text: &str, config: &ParserConfig) -> Result<()> {
    let mut ctx = ParsingContext::new();
    let mut entities = EntityDepths::default();
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for token in Tokenizer::from(text) {
        let Ok(token) = token else { break };
        match token {
            Token::EntityDeclaration {
                name,
                definition: EntityDefinition::EntityValue(value),
                ..
            } => entities.declare(name.as_str(), value.as_str()),
            Token::ElementStart { .. } => ctx.enter_nested(config)?,
            Token::ElementEnd {
                end: ElementEnd::Empty | ElementEnd::Close(..),
                ..
            } => ctx.exit_nested(),
            Token::Text { text: chunk } => {
                let extra = references(chunk.as_str())
                    .map(|name| entities.depth_of(name))
                    .max()
                    .unwrap_or(0);
                if ctx.depth().saturating_add(extra) > config.max_depth {
                    return Err(SecurityError::MaxDepthExceeded.into());
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Entity names referenced as `&name;`, character references excluded
fn references(text: &str) -> impl Iterator<Item = &str> {
    text.split('&')
        .skip(1)
        .filter_map(|rest| rest.split_once(';').map(|(name, _)| name))
        .filter(|name| !name.is_empty() && !name.starts_with('#'))
}

#[derive(Default)]
struct EntityDepths<'a> {
    values: HashMap<&'a str, &'a str>,
    depths: HashMap<&'a str, usize>,
    visiting: HashSet<&'a str>,
}

impl<'a> EntityDepths<'a> {
    fn declare(&mut self, name: &'a str, value: &'a str) {
        // the first declaration wins, later ones are ignored by XML
        self.values.entry(name).or_insert(value);
    }

    /// Deepest element nesting an expansion of `name` produces
    fn depth_of(&mut self, name: &'a str) -> usize {
        if let Some(depth) = self.depths.get(name) {
            return *depth;
        }
        let Some(value) = self.values.get(name).copied() else {
            return 0;
        };
        // reference loops are rejected by roxmltree
        if !self.visiting.insert(name) {
            return 0;
        }

        let mut depth = 0usize;
        let mut max = 0usize;
        for token in Tokenizer::from_fragment(value, 0..value.len()) {
            let Ok(token) = token else { break };
            match token {
                Token::ElementStart { .. } => {
                    depth += 1;
                    max = max.max(depth);
                }
                Token::ElementEnd {
                    end: ElementEnd::Empty | ElementEnd::Close(..),
                    ..
                } => depth = depth.saturating_sub(1),
                Token::Text { text } => {
                    for reference in references(text.as_str()) {
                        max = max.max(depth.saturating_add(self.depth_of(reference)));
                    }
                }
                _ => {}
            }
        }

        self.visiting.remove(name);
        self.depths.insert(name, max);
        max
    }
}
