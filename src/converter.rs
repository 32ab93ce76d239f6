//! Recursive conversion of a parsed XML tree into [`NodeRecord`]s.

use crate::error::Result;
use crate::parser::{qualified_name, ParserConfig, ParsingContext};
use crate::record::{Attrs, NodeRecord};
use roxmltree::Node;
use tracing::warn;

/// Converts an element and its whole subtree.
///
/// Elements with child elements keep only those children, elements without
/// keep their text. Recursion goes as deep as the tree does; use
/// [`TreeConverter`] to bound it.
pub fn node_to_dict(node: Node<'_, '_>) -> NodeRecord {
    let tag = element_name(node);
    let attrs = collect_attrs(node);
    let mut elements = node.children().filter(Node::is_element).peekable();

    if elements.peek().is_some() {
        NodeRecord::branch(tag, elements.map(node_to_dict).collect(), attrs)
    } else {
        NodeRecord::leaf(tag, text_content(node), attrs)
    }
}

/// Converter that enforces the nesting limit of a [`ParserConfig`]
#[derive(Debug, Clone, Default)]
pub struct TreeConverter {
    config: ParserConfig,
}

impl TreeConverter {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn convert(&self, node: Node<'_, '_>) -> Result<NodeRecord> {
        let mut ctx = ParsingContext::new();
        self.convert_node(node, &mut ctx).map_err(|e| {
            warn!(max_depth = self.config.max_depth, "Conversion aborted: {}", e);
            e
        })
    }

    fn convert_node(&self, node: Node<'_, '_>, ctx: &mut ParsingContext) -> Result<NodeRecord> {
        ctx.enter_nested(&self.config)?;

        let tag = element_name(node);
        let attrs = collect_attrs(node);
        let elements: Vec<_> = node.children().filter(Node::is_element).collect();

        let record = if elements.is_empty() {
            NodeRecord::leaf(tag, text_content(node), attrs)
        } else {
            let children = elements
                .into_iter()
                .map(|child| self.convert_node(child, ctx))
                .collect::<Result<Vec<_>>>()?;
            NodeRecord::branch(tag, children, attrs)
        };

        ctx.exit_nested();
        Ok(record)
    }
}

fn element_name(node: Node<'_, '_>) -> String {
    let name = node.tag_name();
    qualified_name(name.namespace(), name.name())
}

fn collect_attrs(node: Node<'_, '_>) -> Attrs {
    node.attributes()
        .map(|attr| {
            (
                qualified_name(attr.namespace(), attr.name()),
                attr.value().to_string(),
            )
        })
        .collect()
}

/// Joins the direct text children, skipping comments and processing
/// instructions; `None` when there are none
fn text_content(node: Node<'_, '_>) -> Option<String> {
    let mut texts = node
        .children()
        .filter(Node::is_text)
        .filter_map(|n| n.text())
        .peekable();
    texts.peek()?;
    Some(texts.collect())
}
