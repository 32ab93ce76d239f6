//! The record produced for every converted XML element.

use crate::query::{self, ChildrenByTag};
use std::collections::HashMap;
use std::fmt;

/// Attribute name to value mapping of an element
pub type Attrs = HashMap<String, String>;

/// One XML element and its subtree.
///
/// An element either has child elements or text, never both: elements with
/// at least one child element become [`NodeBody::Branch`] and any text they
/// carried is dropped, all others become [`NodeBody::Leaf`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    tag: String,
    body: NodeBody,
    attrs: Attrs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeBody {
    /// Element without child elements; `None` when it had no text at all
    Leaf { text: Option<String> },
    /// Element with at least one child element, in document order
    Branch { children: Vec<NodeRecord> },
}

impl NodeRecord {
    pub(crate) fn leaf(tag: String, text: Option<String>, attrs: Attrs) -> Self {
        Self {
            tag,
            body: NodeBody::Leaf { text },
            attrs,
        }
    }

    pub(crate) fn branch(tag: String, children: Vec<Self>, attrs: Attrs) -> Self {
        debug_assert!(!children.is_empty());
        Self {
            tag,
            body: NodeBody::Branch { children },
            attrs,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn body(&self) -> &NodeBody {
        &self.body
    }

    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Text of a leaf; `None` for branches and for leaves without text
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            NodeBody::Leaf { text } => text.as_deref(),
            NodeBody::Branch { .. } => None,
        }
    }

    /// Child records in document order; empty for a leaf
    pub fn children(&self) -> &[Self] {
        match &self.body {
            NodeBody::Leaf { .. } => &[],
            NodeBody::Branch { children } => children,
        }
    }

    pub fn has_children(&self) -> bool {
        matches!(self.body, NodeBody::Branch { .. })
    }

    pub fn is_leaf(&self) -> bool {
        !self.has_children()
    }

    /// See [`query::get_child`]
    pub fn child(&self, tag: &str) -> Option<&Self> {
        query::get_child(self, tag)
    }

    /// See [`query::get_children`]
    pub fn children_by_tag<'a, 't>(&'a self, tag: &'t str) -> ChildrenByTag<'a, 't> {
        query::get_children(self, tag)
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
}

impl fmt::Display for NodeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{tag: ")?;
        write_quoted(f, &self.tag)?;
        match &self.body {
            NodeBody::Leaf { text: Some(text) } => {
                write!(f, ", text: ")?;
                write_quoted(f, text)?;
            }
            NodeBody::Leaf { text: None } => write!(f, ", text: None")?,
            NodeBody::Branch { children } => {
                write!(f, ", children: [")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, "]")?;
            }
        }

        // HashMap order is unstable, sort for a reproducible rendering
        let mut attrs: Vec<_> = self.attrs.iter().collect();
        attrs.sort_unstable();
        write!(f, ", attrs: {{")?;
        for (i, (name, value)) in attrs.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write_quoted(f, name)?;
            write!(f, ": ")?;
            write_quoted(f, value)?;
        }
        write!(f, "}}}}")
    }
}
