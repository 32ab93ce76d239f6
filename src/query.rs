//! Tag lookups over converted records.
//!
//! Both helpers look at direct children only. A leaf record is treated as
//! having no children, so lookups on it find nothing rather than failing.

use crate::record::NodeRecord;
use std::iter::FusedIterator;
use std::slice;

/// Returns the first child of `record` whose tag is `tag`
pub fn get_child<'a>(record: &'a NodeRecord, tag: &str) -> Option<&'a NodeRecord> {
    get_children(record, tag).next()
}

/// Returns a lazy iterator over every child of `record` whose tag is `tag`,
/// in document order
pub fn get_children<'a, 't>(record: &'a NodeRecord, tag: &'t str) -> ChildrenByTag<'a, 't> {
    ChildrenByTag {
        inner: record.children().iter(),
        tag,
    }
}

/// Iterator returned by [`get_children`]
#[derive(Debug, Clone)]
pub struct ChildrenByTag<'a, 't> {
    inner: slice::Iter<'a, NodeRecord>,
    tag: &'t str,
}

impl<'a> Iterator for ChildrenByTag<'a, '_> {
    type Item = &'a NodeRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.tag;
        self.inner.find(|child| child.tag() == tag)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl DoubleEndedIterator for ChildrenByTag<'_, '_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let tag = self.tag;
        self.inner.rfind(|child| child.tag() == tag)
    }
}

impl FusedIterator for ChildrenByTag<'_, '_> {}
